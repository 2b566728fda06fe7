//! Verification code repository trait.
//!
//! The store holds at most one row per email; the backing table carries a
//! unique index on `email` so concurrent issuances resolve to the later write.
//! Emails match exactly: `A@b.com` and `a@b.com` are different keys.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Maximum number of rows removed by a single `delete_by_email` call
pub const DELETE_BATCH_LIMIT: u32 = 100;

/// Repository trait for verification code persistence
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Find the row for an email address
    ///
    /// # Returns
    /// * `Ok(Some(code))` - Row found
    /// * `Ok(None)` - No code has been issued (or it was consumed)
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<VerificationCode>, DomainError>;

    /// Insert a row, replacing any row that holds the same email
    async fn upsert_replacing(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Delete up to [`DELETE_BATCH_LIMIT`] rows for an email, returning how many were removed
    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError>;

    /// Delete one specific row
    ///
    /// Returns `false` when the row no longer exists, e.g. it was replaced by a
    /// newer issuance or consumed concurrently.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
