//! In-memory payment gateway for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::domain::entities::checkout::{CheckoutSession, Customer, CustomerDetails};

use super::traits::PaymentGatewayTrait;
use super::types::CheckoutSessionParams;

/// Customer created through the mock, with the country it was registered in
#[derive(Debug, Clone)]
pub struct CreatedCustomer {
    pub customer: Customer,
    pub details: CustomerDetails,
    pub country: String,
}

#[derive(Default)]
pub struct MockPaymentGateway {
    customers: Mutex<Vec<(String, Customer)>>,
    created: Mutex<Vec<CreatedCustomer>>,
    sessions: Mutex<Vec<CheckoutSessionParams>>,
    calls: AtomicUsize,
    pub fail_lookup: AtomicBool,
    pub fail_create_customer: AtomicBool,
    pub fail_session: AtomicBool,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a customer under `email`
    pub async fn with_customer(self, email: &str, id: &str) -> Self {
        self.customers
            .lock()
            .await
            .push((email.to_string(), Customer { id: id.to_string() }));
        self
    }

    /// Number of calls made against the gateway
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn created_customers(&self) -> Vec<CreatedCustomer> {
        self.created.lock().await.clone()
    }

    pub async fn sessions(&self) -> Vec<CheckoutSessionParams> {
        self.sessions.lock().await.clone()
    }
}

#[async_trait]
impl PaymentGatewayTrait for MockPaymentGateway {
    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err("Payment service error".to_string());
        }
        Ok(self
            .customers
            .lock()
            .await
            .iter()
            .find(|(e, _)| e == email)
            .map(|(_, customer)| customer.clone()))
    }

    async fn create_customer(&self, details: &CustomerDetails, country: &str) -> Result<Customer, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_customer.load(Ordering::SeqCst) {
            return Err("Payment service error".to_string());
        }
        let mut customers = self.customers.lock().await;
        let customer = Customer {
            id: format!("cus_mock_{}", customers.len() + 1),
        };
        customers.push((details.email.clone(), customer.clone()));
        self.created.lock().await.push(CreatedCustomer {
            customer: customer.clone(),
            details: details.clone(),
            country: country.to_string(),
        });
        Ok(customer)
    }

    async fn create_checkout_session(&self, params: &CheckoutSessionParams) -> Result<CheckoutSession, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_session.load(Ordering::SeqCst) {
            return Err("Payment service error".to_string());
        }
        let mut sessions = self.sessions.lock().await;
        sessions.push(params.clone());
        let id = format!("cs_mock_{}", sessions.len());
        Ok(CheckoutSession {
            url: format!("https://checkout.example.com/pay/{}", id),
            id,
        })
    }
}
