//! Payment provider integration

use async_trait::async_trait;

use crate::domain::entities::checkout::{CheckoutSession, Customer, CustomerDetails};

use super::types::CheckoutSessionParams;

/// Trait for payment provider integration
#[async_trait]
pub trait PaymentGatewayTrait: Send + Sync {
    /// First customer registered under `email`, if any
    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, String>;

    /// Register a customer with the given billing country
    async fn create_customer(&self, details: &CustomerDetails, country: &str) -> Result<Customer, String>;

    /// Start a hosted checkout session
    async fn create_checkout_session(&self, params: &CheckoutSessionParams) -> Result<CheckoutSession, String>;
}
