//! Business services containing domain logic and use cases.

pub mod address;
pub mod checkout;
pub mod verification;

// Re-export commonly used types
pub use address::{AddressService, GeocodingServiceTrait, MockGeocodingService};
pub use checkout::{
    CheckoutService, CheckoutServiceConfig, CheckoutSessionParams, MockPaymentGateway,
    PaymentGatewayTrait,
};
pub use verification::{
    CodeGenerator, MailMessage, MailServiceTrait, MockMailService, RngCodeGenerator,
    VerificationService, VerificationServiceConfig,
};
