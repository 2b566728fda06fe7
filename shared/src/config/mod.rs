//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `geocoding` - Address lookup provider settings
//! - `mail` - Outgoing mail transport and sender identity
//! - `payment` - Payment provider credentials and storefront URLs
//! - `rate_limit` - Per-IP request limiting
//! - `server` - HTTP server and CORS configuration
//! - `verification` - Verification code lifetime and operator bypass

pub mod database;
pub mod environment;
pub mod geocoding;
pub mod mail;
pub mod payment;
pub mod rate_limit;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use geocoding::GeocodingConfig;
pub use mail::{MailConfig, MailProvider};
pub use payment::PaymentConfig;
pub use rate_limit::RateLimitConfig;
pub use server::{CorsConfig, ServerConfig};
pub use verification::VerificationConfig;

/// Read an environment variable, treating empty values as unset
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse an environment variable, falling back to `default`
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_non_empty(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Configuration validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing or invalid configuration: {}", .missing.join(", "))]
pub struct ConfigError {
    /// Names of the settings that are missing or invalid
    pub missing: Vec<String>,
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,

    /// Mail delivery configuration
    pub mail: MailConfig,

    /// Payment provider configuration
    pub payment: PaymentConfig,

    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,

    /// Verification code configuration
    pub verification: VerificationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::for_environment(env),
            rate_limit: RateLimitConfig::default(),
            mail: MailConfig::default(),
            payment: PaymentConfig::default(),
            geocoding: GeocodingConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let cors = if environment.is_production() {
            CorsConfig::from_env()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            cors,
            database: DatabaseConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
            rate_limit: RateLimitConfig::from_env(),
            mail: MailConfig::from_env(),
            payment: PaymentConfig::from_env(),
            geocoding: GeocodingConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }

    /// Check that production deployments carry every external credential
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();

        if self.environment.is_production() {
            if self.payment.secret_key.is_empty() {
                missing.push("STRIPE_SECRET_KEY".to_string());
            }
            if self.geocoding.api_key.is_empty() {
                missing.push("GOOGLE_MAPS_API_KEY".to_string());
            }
            if self.mail.provider == MailProvider::Smtp && self.mail.smtp_url.is_none() {
                missing.push("SMTP_URL".to_string());
            }
        }
        if self.payment.app_url.is_empty() {
            missing.push("APP_URL".to_string());
        }
        if self.verification.code_ttl_seconds <= 0 {
            missing.push("VERIFICATION_CODE_TTL_SECONDS".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError { missing })
        }
    }
}
