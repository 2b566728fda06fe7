//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Record store failure; `message` is safe to show to clients
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Mail, payment or geocoding provider failure; `message` is safe to show to clients
    #[error("{service} service error: {message}")]
    ExternalService { service: String, message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Build an [`DomainError::ExternalService`] error
    pub fn external(service: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            DomainError::Auth(err) => err.code(),
            DomainError::ValidationErr(err) => err.code(),
        }
    }

    /// Message that may be shown to clients
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Internal { message } => message.clone(),
            DomainError::ExternalService { message, .. } => message.clone(),
            DomainError::Auth(err) => err.to_string(),
            DomainError::ValidationErr(err) => err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
