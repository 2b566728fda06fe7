//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core services depend on.
//!
//! ## Architecture
//!
//! - **Database**: MySQL verification code store using SQLx
//! - **Mail**: SMTP delivery through lettre, or console output for development
//! - **Payment**: Stripe customers and checkout sessions through the `stripe` client
//! - **Geocoding**: Google Places REST client over reqwest
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL verification code store (default)

// Re-export core error types for convenience
pub use sf_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - outgoing transactional mail
pub mod mail;

/// Payment module - Stripe customers and checkout sessions
pub mod payment;

/// Geocoding module - address autocomplete and place details
pub mod geocoding;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mail transport error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

