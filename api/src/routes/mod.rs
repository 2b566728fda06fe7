//! Route handlers
//!
//! - `verify` - issue a verification code by mail
//! - `checkout` - consume the code and start a payment session
//! - `address` - address autocomplete and place details
//! - `health` - liveness and database check

pub mod address;
pub mod checkout;
pub mod health;
pub mod verify;
