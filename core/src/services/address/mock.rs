//! In-memory geocoding service for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::entities::address::{AddressComponent, AddressPrediction};

use super::traits::GeocodingServiceTrait;

#[derive(Default)]
pub struct MockGeocodingService {
    predictions: Vec<AddressPrediction>,
    places: HashMap<String, Vec<AddressComponent>>,
    calls: AtomicUsize,
    pub should_fail: AtomicBool,
}

impl MockGeocodingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestions returned for any input
    pub fn with_prediction(mut self, place_id: &str, description: &str) -> Self {
        self.predictions.push(AddressPrediction {
            place_id: place_id.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn with_place(mut self, place_id: &str, components: Vec<AddressComponent>) -> Self {
        self.places.insert(place_id.to_string(), components);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodingServiceTrait for MockGeocodingService {
    async fn autocomplete(&self, _input: &str) -> Result<Vec<AddressPrediction>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Geocoding service error".to_string());
        }
        Ok(self.predictions.clone())
    }

    async fn place_details(&self, place_id: &str) -> Result<Vec<AddressComponent>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Geocoding service error".to_string());
        }
        self.places
            .get(place_id)
            .cloned()
            .ok_or_else(|| format!("NOT_FOUND: {}", place_id))
    }
}
