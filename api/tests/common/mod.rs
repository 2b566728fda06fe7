//! Shared wiring for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use sf_api::middleware::RateLimiter;
use sf_api::AppState;
use sf_core::domain::entities::address::AddressComponent;
use sf_core::repositories::MockVerificationCodeRepository;
use sf_core::services::address::MockGeocodingService;
use sf_core::services::checkout::{CheckoutServiceConfig, MockPaymentGateway};
use sf_core::services::verification::{MockMailService, VerificationServiceConfig};
use sf_shared::config::{AppConfig, RateLimitConfig};

pub type TestState =
    AppState<MockVerificationCodeRepository, MockMailService, MockPaymentGateway, MockGeocodingService>;

/// Everything a test needs to drive the app and inspect the collaborators
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub repository: Arc<MockVerificationCodeRepository>,
    pub mail: Arc<MockMailService>,
    pub payment: Arc<MockPaymentGateway>,
    pub geocoding: Arc<MockGeocodingService>,
}

impl TestContext {
    pub fn limiter(&self) -> RateLimiter {
        RateLimiter::new(self.config.rate_limit.clone())
    }
}

pub struct TestContextBuilder {
    verification: VerificationServiceConfig,
    payment: MockPaymentGateway,
    geocoding: MockGeocodingService,
    rate_limit: RateLimitConfig,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            verification: VerificationServiceConfig::default(),
            payment: MockPaymentGateway::default(),
            geocoding: MockGeocodingService::default(),
            rate_limit: RateLimitConfig::disabled(),
        }
    }

    pub fn bypass_code(mut self, code: &str) -> Self {
        self.verification = self.verification.with_always_valid_code(code);
        self
    }

    pub fn payment(mut self, payment: MockPaymentGateway) -> Self {
        self.payment = payment;
        self
    }

    pub fn geocoding(mut self, geocoding: MockGeocodingService) -> Self {
        self.geocoding = geocoding;
        self
    }

    pub fn rate_limit(mut self, per_second: u32, burst: u32) -> Self {
        self.rate_limit = RateLimitConfig {
            enabled: true,
            requests_per_second: per_second,
            burst,
        };
        self
    }

    pub fn build(self) -> TestContext {
        let repository = Arc::new(MockVerificationCodeRepository::new());
        let mail = Arc::new(MockMailService::new(false));
        let payment = Arc::new(self.payment);
        let geocoding = Arc::new(self.geocoding);

        let mut config = AppConfig::default();
        config.rate_limit = self.rate_limit;

        let state = web::Data::new(AppState::new(
            repository.clone(),
            mail.clone(),
            payment.clone(),
            geocoding.clone(),
            self.verification,
            CheckoutServiceConfig::from_payment_config(&config.payment),
        ));

        TestContext {
            state,
            config,
            repository,
            mail,
            payment,
            geocoding,
        }
    }
}

pub fn berlin_components() -> Vec<AddressComponent> {
    vec![
        AddressComponent::new("5", &["street_number"]),
        AddressComponent::new("Hauptstraße", &["route"]),
        AddressComponent::new("Berlin", &["locality", "political"]),
        AddressComponent::new("10115", &["postal_code"]),
    ]
}

pub fn checkout_body(email: &str, code: &str) -> serde_json::Value {
    serde_json::json!({
        "verificationCode": code,
        "name": "Erika Mustermann",
        "email": email,
        "phone": "+49301234567",
        "address": {
            "line1": "Hauptstraße 5",
            "line2": "",
            "city": "Berlin",
            "postalCode": "10115"
        }
    })
}
