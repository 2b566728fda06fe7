//! # Storefront Core
//!
//! Core business logic and domain layer for the storefront backend.
//! This crate contains domain entities, business services, repository interfaces,
//! collaborator traits and error types that form the foundation of the application.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Address, AddressComponent, AddressPrediction, Cart, CheckoutRequest, CheckoutSession,
    Customer, CustomerDetails, LineItem, VerificationCode,
};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{MockVerificationCodeRepository, VerificationCodeRepository};
