//! Traits for mail delivery and code generation

use async_trait::async_trait;

use super::types::MailMessage;

/// Trait for mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a message
    async fn send(&self, message: &MailMessage) -> Result<(), String>;
}

/// Source of verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a zero-padded 6-digit code
    fn generate(&self) -> String;
}
