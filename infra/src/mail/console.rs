//! Console mail output for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sf_core::services::verification::{MailMessage, MailServiceTrait};
use sf_shared::utils::validation::mask_email;

/// Prints messages instead of delivering them
#[derive(Clone)]
pub struct ConsoleMailService {
    message_count: Arc<AtomicU64>,
    console_output: bool,
}

impl ConsoleMailService {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output: true,
        }
    }

    /// Log only, without printing the banner to stdout
    pub fn quiet() -> Self {
        Self {
            console_output: false,
            ..Self::new()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for ConsoleMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailServiceTrait for ConsoleMailService {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        if self.console_output {
            println!();
            println!("========================================");
            println!("  MAIL TO: {}", message.to);
            println!("  FROM: {}", message.from);
            println!("  SUBJECT: {}", message.subject);
            println!("----------------------------------------");
            println!("{}", message.text);
            println!("========================================");
            println!();
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(to = %mask_email(&message.to), subject = %message.subject, count, "Mail written to console");

        Ok(())
    }
}
