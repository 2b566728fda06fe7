//! Common types shared across the server

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus};
