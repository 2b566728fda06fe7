//! Configuration for the verification service

use sf_shared::config::AppConfig;

use crate::domain::entities::verification_code::DEFAULT_EXPIRATION_MINUTES;

use super::types::SenderIdentity;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of seconds before a verification code expires
    pub code_expiration_seconds: i64,
    /// Code that passes validation without a stored row; `None` or empty disables it
    pub always_valid_code: Option<String>,
    /// `From` of verification mails
    pub sender: SenderIdentity,
    /// Shop name rendered into the mail template
    pub app_name: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_seconds: DEFAULT_EXPIRATION_MINUTES * 60,
            always_valid_code: None,
            sender: SenderIdentity::new("Storefront", "noreply@localhost"),
            app_name: "Storefront".to_string(),
        }
    }
}

impl VerificationServiceConfig {
    /// Build from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            code_expiration_seconds: config.verification.code_ttl_seconds,
            always_valid_code: config.verification.always_valid_code.clone(),
            sender: SenderIdentity::new(&config.mail.sender_name, &config.mail.sender_address),
            app_name: config.mail.app_name.clone(),
        }
    }

    /// Set the bypass code
    pub fn with_always_valid_code(mut self, code: impl Into<String>) -> Self {
        self.always_valid_code = Some(code.into());
        self
    }

    /// The bypass code, if one is configured and non-empty
    pub fn bypass_code(&self) -> Option<&str> {
        self.always_valid_code
            .as_deref()
            .filter(|code| !code.is_empty())
    }

    /// Code lifetime in whole minutes, rounded up
    pub fn expiration_minutes(&self) -> i64 {
        (self.code_expiration_seconds + 59) / 60
    }
}
