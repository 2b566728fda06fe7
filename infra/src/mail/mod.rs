//! Mail Module
//!
//! Outgoing transactional mail for verification codes.
//!
//! - **SMTP**: delivery through a relay using lettre
//! - **Console**: prints messages to stdout and the log for development

use async_trait::async_trait;

use sf_core::services::verification::{MailMessage, MailServiceTrait};
use sf_shared::config::{MailConfig, MailProvider};

pub mod console;
pub mod smtp;

pub use console::ConsoleMailService;
pub use smtp::SmtpMailService;


/// Mail transport selected at startup
pub enum MailSender {
    Smtp(SmtpMailService),
    Console(ConsoleMailService),
}

impl MailSender {
    /// Name of the active transport, for startup logging
    pub fn transport_name(&self) -> &'static str {
        match self {
            MailSender::Smtp(_) => "smtp",
            MailSender::Console(_) => "console",
        }
    }
}

#[async_trait]
impl MailServiceTrait for MailSender {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        match self {
            MailSender::Smtp(sender) => sender.send(message).await,
            MailSender::Console(sender) => sender.send(message).await,
        }
    }
}

/// Create a mail service based on configuration
///
/// Falls back to console output when SMTP is requested but cannot be set up.
pub fn create_mail_service(config: &MailConfig) -> MailSender {
    match config.provider {
        MailProvider::Console => MailSender::Console(ConsoleMailService::new()),
        MailProvider::Smtp => {
            let Some(url) = config.smtp_url.as_deref() else {
                tracing::error!("MAIL_PROVIDER is smtp but SMTP_URL is not set");
                tracing::warn!("Falling back to console mail service");
                return MailSender::Console(ConsoleMailService::new());
            };

            match SmtpMailService::new(url) {
                Ok(service) => MailSender::Smtp(service),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize SMTP mail service");
                    tracing::warn!("Falling back to console mail service");
                    MailSender::Console(ConsoleMailService::new())
                }
            }
        }
    }
}
