use sf_shared::config::PaymentConfig;

/// Redirect targets and defaults for checkout sessions
#[derive(Debug, Clone)]
pub struct CheckoutServiceConfig {
    pub success_url: String,
    pub cancel_url: String,
    /// Country assigned to newly created customers
    pub customer_country: String,
    pub automatic_tax: bool,
}

impl Default for CheckoutServiceConfig {
    fn default() -> Self {
        Self::from_payment_config(&PaymentConfig::default())
    }
}

impl CheckoutServiceConfig {
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self {
            success_url: config.success_url(),
            cancel_url: config.cancel_url(),
            customer_country: config.customer_country.clone(),
            automatic_tax: true,
        }
    }
}
