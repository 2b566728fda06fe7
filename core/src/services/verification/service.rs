//! Main verification service implementation

use chrono::Duration;
use constant_time_eq::constant_time_eq;
use sf_shared::utils::validation::{is_valid_email, mask_email};
use std::sync::Arc;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::VerificationCodeRepository;

use super::config::VerificationServiceConfig;
use super::generator::RngCodeGenerator;
use super::traits::{CodeGenerator, MailServiceTrait};
use super::types::MailMessage;

/// Issues and consumes single-use email verification codes
pub struct VerificationService<R: VerificationCodeRepository, M: MailServiceTrait> {
    /// Code store
    repository: Arc<R>,
    /// Mail service for delivering codes
    mail_service: Arc<M>,
    /// Random code source
    generator: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<R: VerificationCodeRepository, M: MailServiceTrait> VerificationService<R, M> {
    /// Create a new verification service drawing codes from the OS random source
    pub fn new(repository: Arc<R>, mail_service: Arc<M>, config: VerificationServiceConfig) -> Self {
        Self {
            repository,
            mail_service,
            generator: Arc::new(RngCodeGenerator::os()),
            config,
        }
    }

    /// Replace the code source
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a fresh code for `email` and mail it
    ///
    /// Any earlier code for the address is discarded first. When delivery
    /// fails the new row is removed again on a best-effort basis. The code
    /// itself is never returned.
    pub async fn request_code(&self, email: &str) -> DomainResult<()> {
        if !is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "invalid_email",
                "Rejected verification request for malformed email"
            );
            return Err(ValidationError::InvalidEmail.into());
        }
        let masked = mask_email(email);

        let removed = self.repository.delete_by_email(email).await.map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "code_cleanup_failed", "Failed to delete previous verification codes");
            e
        })?;
        if removed > 0 {
            tracing::debug!(email = %masked, removed, event = "previous_codes_invalidated", "Discarded previous verification codes");
        }

        let record = VerificationCode::new(
            email,
            self.generator.generate(),
            Duration::seconds(self.config.code_expiration_seconds),
        );
        let record = self.repository.upsert_replacing(record).await.map_err(|e| {
            tracing::error!(email = %masked, error = %e, event = "code_storage_failed", "Failed to store verification code");
            e
        })?;

        tracing::info!(
            email = %masked,
            event = "code_generated",
            code_id = %record.id,
            expires = %record.expires,
            "Generated new verification code"
        );

        let message = self.render_message(email, &record.code);
        if let Err(e) = self.mail_service.send(&message).await {
            tracing::error!(email = %masked, error = %e, event = "code_dispatch_failed", "Failed to send verification email");

            match self.repository.delete(record.id).await {
                Ok(_) => {}
                Err(cleanup) => tracing::warn!(
                    email = %masked,
                    error = %cleanup,
                    code_id = %record.id,
                    event = "code_cleanup_failed",
                    "Undelivered verification code left in store"
                ),
            }

            return Err(DomainError::external("mail", "Failed to send email"));
        }

        tracing::info!(email = %masked, event = "code_sent", "Verification code sent");
        Ok(())
    }

    /// Check `submitted` against the stored code for `email` and consume it
    ///
    /// Succeeds at most once per issued code. Expired and mismatched codes
    /// leave the stored row in place.
    pub async fn validate_and_consume(&self, email: &str, submitted: &str) -> DomainResult<()> {
        let masked = mask_email(email);

        if let Some(bypass) = self.config.bypass_code() {
            if Self::constant_time_compare(bypass, submitted) {
                tracing::warn!(email = %masked, event = "code_bypassed", "Verification bypassed with operator code");
                return Ok(());
            }
        }

        let record = match self.repository.find_by_email(email).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::warn!(email = %masked, event = "code_not_found", "No verification code pending");
                return Err(AuthError::VerificationFailed.into());
            }
            Err(e) => {
                tracing::error!(email = %masked, error = %e, event = "code_lookup_failed", "Failed to look up verification code");
                return Err(e);
            }
        };

        if record.is_expired() {
            tracing::warn!(email = %masked, code_id = %record.id, event = "code_expired", "Verification code expired");
            return Err(AuthError::VerificationCodeExpired.into());
        }

        if !Self::constant_time_compare(&record.code, submitted) {
            tracing::warn!(email = %masked, code_id = %record.id, event = "code_mismatch", "Verification code mismatch");
            return Err(AuthError::VerificationFailed.into());
        }

        match self.repository.delete(record.id).await {
            Ok(true) => {
                tracing::info!(email = %masked, code_id = %record.id, event = "code_consumed", "Verification code consumed");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(email = %masked, code_id = %record.id, event = "code_already_consumed", "Verification code consumed concurrently");
                Err(AuthError::VerificationFailed.into())
            }
            Err(e) => {
                tracing::error!(email = %masked, error = %e, event = "code_consume_failed", "Failed to consume verification code");
                Err(e)
            }
        }
    }

    fn render_message(&self, email: &str, code: &str) -> MailMessage {
        let app_name = &self.config.app_name;
        MailMessage {
            from: self.config.sender.clone(),
            to: email.to_string(),
            subject: format!("Dein Verifizierungscode für {}", app_name),
            text: format!(
                "Gib folgenden Code ein, um deine Bestellung abzuschließen: {}\nEr ist {} Minuten lang gültig.\n\nDein {} Team\n",
                code,
                self.config.expiration_minutes(),
                app_name
            ),
        }
    }

    fn constant_time_compare(code_a: &str, code_b: &str) -> bool {
        if code_a.len() != code_b.len() {
            return false;
        }
        constant_time_eq(code_a.as_bytes(), code_b.as_bytes())
    }
}
