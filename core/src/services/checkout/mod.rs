//! Checkout: verification gate, payment customer resolution and hosted session creation

mod config;
pub mod mock;
mod service;
mod traits;
mod types;


pub use config::CheckoutServiceConfig;
pub use mock::MockPaymentGateway;
pub use service::CheckoutService;
pub use traits::PaymentGatewayTrait;
pub use types::CheckoutSessionParams;
