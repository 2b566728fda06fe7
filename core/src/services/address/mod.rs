//! Address autocomplete and place lookups backed by a geocoding provider

pub mod mock;
mod service;
mod traits;


pub use mock::MockGeocodingService;
pub use service::AddressService;
pub use traits::GeocodingServiceTrait;
