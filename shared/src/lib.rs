//! Shared utilities and common types for the storefront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - API response structures
//! - Utility functions (email validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, GeocodingConfig,
    LoggingConfig, MailConfig, PaymentConfig, RateLimitConfig, ServerConfig, VerificationConfig,
};
pub use types::{ErrorResponse, HealthResponse, HealthStatus};
pub use utils::validation;
