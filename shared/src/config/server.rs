//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Enable response compression
    #[serde(default = "default_enable_compression")]
    pub enable_compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8090,
            workers: 0,
            keep_alive: default_keep_alive(),
            max_payload_size: default_max_payload_size(),
            enable_compression: default_enable_compression(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: super::env_non_empty("SERVER_HOST").unwrap_or(defaults.host),
            port: super::env_parse("SERVER_PORT", defaults.port),
            workers: super::env_parse("SERVER_WORKERS", defaults.workers),
            keep_alive: super::env_parse("SERVER_KEEP_ALIVE", defaults.keep_alive),
            max_payload_size: super::env_parse("SERVER_MAX_PAYLOAD_SIZE", defaults.max_payload_size),
            enable_compression: super::env_parse("SERVER_ENABLE_COMPRESSION", defaults.enable_compression),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allow any origin (development only)
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: false,
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }

    /// Restrictive configuration with origins from `ALLOWED_ORIGINS` (comma separated)
    pub fn from_env() -> Self {
        let allowed_origins = super::env_non_empty("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            allow_any_origin: false,
            allowed_origins,
            max_age: super::env_parse("CORS_MAX_AGE", default_max_age()),
        }
    }
}

fn default_keep_alive() -> u64 {
    75
}

fn default_max_payload_size() -> usize {
    64 * 1024
}

fn default_enable_compression() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}
