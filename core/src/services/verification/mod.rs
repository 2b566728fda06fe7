//! Verification service module for email-gated checkout
//!
//! This module provides the verification code workflow:
//! - Code generation from an injectable random source
//! - Issuing codes by email, replacing any earlier code for the address
//! - Single-use validation with lazy expiry
//! - An operator-configured bypass code

mod config;
mod generator;
pub mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use generator::RngCodeGenerator;
pub use mock::MockMailService;
pub use service::VerificationService;
pub use traits::{CodeGenerator, MailServiceTrait};
pub use types::{MailMessage, SenderIdentity};
