//! Geocoding provider configuration

use serde::{Deserialize, Serialize};

/// Google Places configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingConfig {
    /// Maps API key
    #[serde(skip_serializing)]
    pub api_key: String,

    /// API base URL
    pub api_base: String,

    /// Result language
    pub language: String,

    /// ISO country the autocomplete is restricted to
    pub country: String,

    /// Place type filter for autocomplete
    pub place_type: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: String::from("https://maps.googleapis.com"),
            language: String::from("de"),
            country: String::from("DE"),
            place_type: String::from("address"),
            timeout_seconds: 10,
        }
    }
}

impl GeocodingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: super::env_non_empty("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            api_base: super::env_non_empty("GOOGLE_MAPS_API_BASE").unwrap_or(defaults.api_base),
            language: super::env_non_empty("GEOCODING_LANGUAGE").unwrap_or(defaults.language),
            country: super::env_non_empty("GEOCODING_COUNTRY").unwrap_or(defaults.country),
            ..defaults
        }
    }
}
