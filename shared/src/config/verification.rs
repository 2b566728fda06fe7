//! Verification code configuration

use serde::{Deserialize, Serialize};

/// Verification code lifetime and operator bypass
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Code lifetime in seconds
    pub code_ttl_seconds: i64,

    /// Code that always validates; unset or empty disables the bypass
    #[serde(default, skip_serializing)]
    pub always_valid_code: Option<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,
            always_valid_code: None,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            code_ttl_seconds: super::env_parse("VERIFICATION_CODE_TTL_SECONDS", 300),
            always_valid_code: super::env_non_empty("ALWAYS_VALID_VERIFICATION_CODE"),
        }
    }
}
