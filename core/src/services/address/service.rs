use std::sync::Arc;

use crate::domain::entities::address::{Address, AddressPrediction};
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::traits::GeocodingServiceTrait;

const GEOCODING_SERVICE: &str = "geocoding";

/// Thin wrapper over the geocoding provider
pub struct AddressService<G: GeocodingServiceTrait> {
    geocoding: Arc<G>,
}

impl<G: GeocodingServiceTrait> AddressService<G> {
    pub fn new(geocoding: Arc<G>) -> Self {
        Self { geocoding }
    }

    /// Address suggestions; blank input yields an empty list without a provider call
    pub async fn autocomplete(&self, input: &str) -> DomainResult<Vec<AddressPrediction>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        self.geocoding.autocomplete(input).await.map_err(|e| {
            tracing::error!(error = %e, event = "autocomplete_failed", "Failed to autocomplete address");
            DomainError::external(GEOCODING_SERVICE, "Failed to autocomplete address")
        })
    }

    /// Resolve a place into a postal address
    pub async fn place_details(&self, place_id: &str) -> DomainResult<Address> {
        if place_id.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "placeId".to_string(),
            }
            .into());
        }

        let components = self.geocoding.place_details(place_id).await.map_err(|e| {
            tracing::error!(place_id, error = %e, event = "place_details_failed", "Failed to get place details");
            DomainError::external(GEOCODING_SERVICE, "Failed to get place details")
        })?;

        Ok(Address::from_components(&components))
    }
}
