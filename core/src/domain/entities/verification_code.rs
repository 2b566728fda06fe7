//! Verification code entity for email-gated checkout.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// A single-use code issued to an email address
///
/// The store keeps at most one row per email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Row identifier
    pub id: Uuid,

    /// Address the code was mailed to
    pub email: String,

    /// Zero-padded 6-digit code
    pub code: String,

    /// Instant at which the code stops being accepted
    pub expires: DateTime<Utc>,

    /// Issuance time
    pub created: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a code for `email` that expires `ttl` from now
    pub fn new(email: impl Into<String>, code: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            code: code.into(),
            expires: now + ttl,
            created: now,
        }
    }

    /// A code is expired once `expires` is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
