//! Checkout service implementation

use sf_shared::utils::validation::mask_email;
use std::sync::Arc;

use crate::domain::entities::checkout::{Cart, CheckoutRequest, CheckoutSession, Customer};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::VerificationCodeRepository;
use crate::services::verification::{MailServiceTrait, VerificationService};

use super::config::CheckoutServiceConfig;
use super::traits::PaymentGatewayTrait;
use super::types::CheckoutSessionParams;

const PAYMENT_SERVICE: &str = "payment";

/// Runs the verification gate, then hands the storefront cart to the payment provider
pub struct CheckoutService<R, M, P>
where
    R: VerificationCodeRepository,
    M: MailServiceTrait,
    P: PaymentGatewayTrait,
{
    verification_service: Arc<VerificationService<R, M>>,
    payment_gateway: Arc<P>,
    config: CheckoutServiceConfig,
}

impl<R, M, P> CheckoutService<R, M, P>
where
    R: VerificationCodeRepository,
    M: MailServiceTrait,
    P: PaymentGatewayTrait,
{
    pub fn new(
        verification_service: Arc<VerificationService<R, M>>,
        payment_gateway: Arc<P>,
        config: CheckoutServiceConfig,
    ) -> Self {
        Self {
            verification_service,
            payment_gateway,
            config,
        }
    }

    /// Consume the verification code and start a hosted checkout session
    ///
    /// The payment provider is not contacted unless verification succeeds.
    /// A consumed code stays consumed when a later step fails.
    pub async fn checkout(&self, request: CheckoutRequest) -> DomainResult<CheckoutSession> {
        let email = request.customer.email.as_str();
        let masked = mask_email(email);

        self.verification_service
            .validate_and_consume(email, &request.verification_code)
            .await?;

        let customer = self.resolve_customer(&request).await?;

        let params = CheckoutSessionParams {
            customer_id: customer.id.clone(),
            cart: Cart::storefront(),
            success_url: self.config.success_url.clone(),
            cancel_url: self.config.cancel_url.clone(),
            automatic_tax: self.config.automatic_tax,
        };

        let session = self
            .payment_gateway
            .create_checkout_session(&params)
            .await
            .map_err(|e| {
                tracing::error!(email = %masked, customer_id = %customer.id, error = %e, event = "checkout_session_failed", "Failed to create checkout session");
                DomainError::external(PAYMENT_SERVICE, "checkout session creation failed")
            })?;

        tracing::info!(
            email = %masked,
            customer_id = %customer.id,
            session_id = %session.id,
            event = "checkout_session_created",
            "Checkout session created"
        );
        Ok(session)
    }

    async fn resolve_customer(&self, request: &CheckoutRequest) -> DomainResult<Customer> {
        let email = request.customer.email.as_str();
        let masked = mask_email(email);

        let existing = self
            .payment_gateway
            .find_customer_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!(email = %masked, error = %e, event = "customer_lookup_failed", "Failed to list customers");
                DomainError::external(PAYMENT_SERVICE, "customer lookup failed")
            })?;

        if let Some(customer) = existing {
            tracing::debug!(email = %masked, customer_id = %customer.id, event = "customer_reused", "Using existing customer");
            return Ok(customer);
        }

        let customer = self
            .payment_gateway
            .create_customer(&request.customer, &self.config.customer_country)
            .await
            .map_err(|e| {
                tracing::error!(email = %masked, error = %e, event = "customer_creation_failed", "Failed to create customer");
                DomainError::external(PAYMENT_SERVICE, "customer creation failed")
            })?;

        tracing::info!(email = %masked, customer_id = %customer.id, event = "customer_created", "Created customer");
        Ok(customer)
    }
}
