//! Request and response bodies

pub mod address;
pub mod checkout;
pub mod verify;

pub use address::{AutocompleteQuery, PlaceDetailsQuery};
pub use checkout::{AddressPayload, CheckoutPayload, CheckoutResponse};
pub use verify::VerifyQuery;
