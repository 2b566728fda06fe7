use crate::errors::{AuthError, DomainError, ValidationError};

#[test]
fn test_auth_error_messages() {
    assert_eq!(AuthError::VerificationFailed.to_string(), "Verification failed");
    assert_eq!(
        AuthError::VerificationCodeExpired.to_string(),
        "Verification code expired"
    );
}

#[test]
fn test_bridged_errors_are_transparent() {
    let err: DomainError = AuthError::VerificationCodeExpired.into();
    assert_eq!(err.to_string(), "Verification code expired");
    assert_eq!(err.code(), "VERIFICATION_CODE_EXPIRED");

    let err: DomainError = ValidationError::InvalidEmail.into();
    assert_eq!(err.public_message(), "Invalid email");
    assert_eq!(err.code(), "INVALID_EMAIL");
}

#[test]
fn test_external_service_error() {
    let err = DomainError::external("mail", "Failed to send email");
    assert_eq!(err.code(), "EXTERNAL_SERVICE_ERROR");
    assert_eq!(err.public_message(), "Failed to send email");
    assert_eq!(err.to_string(), "mail service error: Failed to send email");
}

#[test]
fn test_internal_error_keeps_message() {
    let err = DomainError::Internal {
        message: "Failed to save verification code".to_string(),
    };
    assert_eq!(err.code(), "INTERNAL_ERROR");
    assert_eq!(err.public_message(), "Failed to save verification code");
}
