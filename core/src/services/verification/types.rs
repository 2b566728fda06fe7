//! Types for the verification service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sender identity, kept as separate display name and address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
    /// Display name; empty for a bare address
    pub name: String,
    pub address: String,
}

impl SenderIdentity {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for SenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.address)
        } else {
            write!(f, "{} <{}>", self.name, self.address)
        }
    }
}

/// Plain-text transactional mail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: SenderIdentity,
    /// Recipient address
    pub to: String,
    pub subject: String,
    pub text: String,
}
