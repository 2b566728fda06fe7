use serde::Deserialize;

/// Query string of `GET /api/verify`
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    /// Missing parameter is treated as an empty (invalid) address
    #[serde(default)]
    pub email: String,
}
