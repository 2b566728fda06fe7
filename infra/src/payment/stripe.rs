//! Stripe gateway built on the `stripe` client
//!
//! Only the three calls checkout needs are made: customer search by email,
//! customer creation and checkout session creation.

use async_trait::async_trait;
use stripe::{
    CheckoutSessionMode, Client, CreateCheckoutSession, CreateCheckoutSessionAutomaticTax,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCustomer, Currency, CustomerId,
    ListCustomers,
};
use stripe::Address as OptionalFieldsAddress;

use sf_core::domain::entities::checkout::{CheckoutSession, Customer, CustomerDetails};
use sf_core::services::checkout::{CheckoutSessionParams, PaymentGatewayTrait};
use sf_shared::config::PaymentConfig;
use sf_shared::utils::validation::mask_email;

/// Stripe client implementing [`PaymentGatewayTrait`]
#[derive(Clone)]
pub struct StripePaymentGateway {
    client: Client,
}

impl StripePaymentGateway {
    pub fn new(config: &PaymentConfig) -> Self {
        let client = Client::from_url(config.api_base.as_str(), config.secret_key.as_str());
        Self { client }
    }
}

/// Customer search restricted to the first match for `email`
pub(crate) fn list_customers_params(email: &str) -> ListCustomers<'_> {
    let mut params = ListCustomers::new();
    params.email = Some(email);
    params.limit = Some(1);
    params
}

/// New customer carrying the checkout form's contact details
pub(crate) fn create_customer_params<'a>(details: &'a CustomerDetails, country: &str) -> CreateCustomer<'a> {
    CreateCustomer {
        name: Some(&details.name),
        email: Some(&details.email),
        phone: Some(&details.phone),
        address: Some(OptionalFieldsAddress {
            line1: Some(details.address.line1.clone()),
            line2: Some(details.address.line2.clone()),
            city: Some(details.address.city.clone()),
            postal_code: Some(details.address.postal_code.clone()),
            country: Some(country.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// One-off payment session for the cart, priced inline
pub(crate) fn create_session_params(params: &CheckoutSessionParams) -> Result<CreateCheckoutSession<'_>, String> {
    let customer = params
        .customer_id
        .parse::<CustomerId>()
        .map_err(|e| format!("Invalid customer id: {}", e))?;
    let currency = params
        .cart
        .currency
        .parse::<Currency>()
        .map_err(|_| format!("Unsupported currency: {}", params.cart.currency))?;

    let line_items = params
        .cart
        .items
        .iter()
        .map(|item| CreateCheckoutSessionLineItems {
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: item.name.clone(),
                    description: Some(item.description.clone()),
                    tax_code: Some(item.tax_code.clone()),
                    ..Default::default()
                }),
                unit_amount: Some(item.unit_amount),
                ..Default::default()
            }),
            quantity: Some(u64::from(item.quantity)),
            ..Default::default()
        })
        .collect();

    Ok(CreateCheckoutSession {
        customer: Some(customer),
        mode: Some(CheckoutSessionMode::Payment),
        line_items: Some(line_items),
        success_url: Some(&params.success_url),
        cancel_url: Some(&params.cancel_url),
        automatic_tax: Some(CreateCheckoutSessionAutomaticTax {
            enabled: params.automatic_tax,
            ..Default::default()
        }),
        ..Default::default()
    })
}

#[async_trait]
impl PaymentGatewayTrait for StripePaymentGateway {
    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, String> {
        let customers = stripe::Customer::list(&self.client, &list_customers_params(email))
            .await
            .map_err(|e| {
                tracing::error!(email = %mask_email(email), error = %e, "Stripe customer lookup failed");
                format!("Stripe customer lookup failed: {}", e)
            })?;

        Ok(customers.data.into_iter().next().map(|c| Customer { id: c.id.to_string() }))
    }

    async fn create_customer(&self, details: &CustomerDetails, country: &str) -> Result<Customer, String> {
        let customer = stripe::Customer::create(&self.client, create_customer_params(details, country))
            .await
            .map_err(|e| {
                tracing::error!(email = %mask_email(&details.email), error = %e, "Stripe customer creation failed");
                format!("Stripe customer creation failed: {}", e)
            })?;

        tracing::info!(customer_id = %customer.id, "Stripe customer created");
        Ok(Customer { id: customer.id.to_string() })
    }

    async fn create_checkout_session(&self, params: &CheckoutSessionParams) -> Result<CheckoutSession, String> {
        let session = stripe::CheckoutSession::create(&self.client, create_session_params(params)?)
            .await
            .map_err(|e| {
                tracing::error!(customer_id = %params.customer_id, error = %e, "Stripe session creation failed");
                format!("Stripe session creation failed: {}", e)
            })?;

        let url = session
            .url
            .ok_or_else(|| format!("Stripe session {} has no redirect URL", session.id))?;

        Ok(CheckoutSession { id: session.id.to_string(), url })
    }
}
