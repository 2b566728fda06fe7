//! Payment provider configuration

use serde::{Deserialize, Serialize};

/// Stripe configuration and storefront redirect base
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Secret API key
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// API base URL
    pub api_base: String,

    /// Public storefront URL; checkout redirects to `{app_url}/success` and `{app_url}/cancel`
    pub app_url: String,

    /// Country assigned to newly created customers
    pub customer_country: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: String::from("https://api.stripe.com"),
            app_url: String::from("http://localhost:5173"),
            customer_country: String::from("DE"),
        }
    }
}

impl PaymentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret_key: super::env_non_empty("STRIPE_SECRET_KEY").unwrap_or_default(),
            api_base: super::env_non_empty("STRIPE_API_BASE").unwrap_or(defaults.api_base),
            app_url: super::env_non_empty("APP_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.app_url),
            ..defaults
        }
    }

    pub fn success_url(&self) -> String {
        format!("{}/success", self.app_url)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.app_url)
    }
}
