use async_trait::async_trait;

use crate::domain::entities::address::{AddressComponent, AddressPrediction};

/// Trait for geocoding provider integration
#[async_trait]
pub trait GeocodingServiceTrait: Send + Sync {
    /// Address suggestions for a partial input
    async fn autocomplete(&self, input: &str) -> Result<Vec<AddressPrediction>, String>;

    /// Address components of a place
    async fn place_details(&self, place_id: &str) -> Result<Vec<AddressComponent>, String>;
}
