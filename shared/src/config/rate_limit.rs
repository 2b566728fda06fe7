//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Per-IP token bucket settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    pub enabled: bool,

    /// Tokens refilled per second
    pub requests_per_second: u32,

    /// Bucket capacity
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_second: 1,
            burst: 3,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: super::env_parse("RATE_LIMIT_ENABLED", defaults.enabled),
            requests_per_second: super::env_parse("RATE_LIMIT_PER_SECOND", defaults.requests_per_second)
                .max(1),
            burst: super::env_parse("RATE_LIMIT_BURST", defaults.burst).max(1),
        }
    }

    /// Disabled configuration, used by tests
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}
