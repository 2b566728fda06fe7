//! Domain entities representing core business objects.

pub mod address;
pub mod checkout;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use address::{Address, AddressComponent, AddressPrediction};
pub use checkout::{Cart, CheckoutRequest, CheckoutSession, Customer, CustomerDetails, LineItem};
pub use verification_code::{VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
