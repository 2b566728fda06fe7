//! In-memory mail service for tests and local development

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::MailServiceTrait;
use super::types::MailMessage;

/// Records every message instead of delivering it
#[derive(Default)]
pub struct MockMailService {
    pub sent_messages: Arc<Mutex<Vec<MailMessage>>>,
    should_fail: AtomicBool,
}

impl MockMailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            should_fail: AtomicBool::new(should_fail),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn sent_count(&self) -> usize {
        self.sent_messages.lock().await.len()
    }

    /// Most recent message addressed to `to`
    pub async fn last_message_to(&self, to: &str) -> Option<MailMessage> {
        self.sent_messages
            .lock()
            .await
            .iter()
            .rev()
            .find(|message| message.to == to)
            .cloned()
    }

    /// First run of six digits in the most recent message to `to`
    pub async fn last_code_for(&self, to: &str) -> Option<String> {
        let message = self.last_message_to(to).await?;
        let chars: Vec<char> = message.text.chars().collect();
        chars
            .windows(6)
            .find(|w| w.iter().all(|c| c.is_ascii_digit()))
            .map(|w| w.iter().collect())
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail service error".to_string());
        }
        self.sent_messages.lock().await.push(message.clone());
        Ok(())
    }
}
