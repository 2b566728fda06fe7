//! Payment module - Stripe customers and hosted checkout sessions

pub mod stripe;

pub use stripe::StripePaymentGateway;
