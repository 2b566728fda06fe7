//! Repository interfaces and in-memory implementations.

pub mod verification_code;

pub use verification_code::{MockVerificationCodeRepository, VerificationCodeRepository};
