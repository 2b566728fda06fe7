//! In-memory implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// Mock verification code repository keyed by email
#[derive(Default)]
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `find_by_email` fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make `upsert_replacing` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make `delete` fail; `delete_by_email` is unaffected
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored rows
    pub async fn count(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Stored row for an email, bypassing failure injection
    pub async fn get(&self, email: &str) -> Option<VerificationCode> {
        self.codes.read().await.get(email).cloned()
    }

    /// Overwrite the expiry of a stored row
    pub async fn set_expires(&self, email: &str, expires: DateTime<Utc>) -> bool {
        match self.codes.write().await.get_mut(email) {
            Some(code) => {
                code.expires = expires;
                true
            }
            None => false,
        }
    }

    fn store_error(operation: &str) -> DomainError {
        DomainError::Internal {
            message: format!("Failed to {} verification code", operation),
        }
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<VerificationCode>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::store_error("find"));
        }
        Ok(self.codes.read().await.get(email).cloned())
    }

    async fn upsert_replacing(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::store_error("save"));
        }
        self.codes
            .write()
            .await
            .insert(code.email.clone(), code.clone());
        Ok(code)
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        Ok(self.codes.write().await.remove(email).map_or(0, |_| 1))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Self::store_error("delete"));
        }
        let mut codes = self.codes.write().await;
        let email = codes
            .iter()
            .find(|(_, code)| code.id == id)
            .map(|(email, _)| email.clone());
        Ok(match email {
            Some(email) => codes.remove(&email).is_some(),
            None => false,
        })
    }
}
