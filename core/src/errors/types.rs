//! Error types for verification and input validation

use thiserror::Error;

/// Verification gate failures
///
/// A missing code and a wrong code both surface as `VerificationFailed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Verification failed")]
    VerificationFailed,

    #[error("Verification code expired")]
    VerificationCodeExpired,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::VerificationFailed => "VERIFICATION_FAILED",
            AuthError::VerificationCodeExpired => "VERIFICATION_CODE_EXPIRED",
        }
    }
}

/// Validation errors for client input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        }
    }
}
