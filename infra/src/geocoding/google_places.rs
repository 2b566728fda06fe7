//! Google Places web service client
//!
//! Autocomplete is restricted to the configured language, country and place
//! type. Place details only request the `address_component` field.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use sf_core::domain::entities::address::{AddressComponent, AddressPrediction};
use sf_core::services::address::GeocodingServiceTrait;
use sf_shared::config::GeocodingConfig;

use crate::InfrastructureError;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Places client implementing [`GeocodingServiceTrait`]
#[derive(Clone)]
pub struct GooglePlacesService {
    http: reqwest::Client,
    config: GeocodingConfig,
}

impl GooglePlacesService {
    pub fn new(config: GeocodingConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, config })
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/maps/api/place/{}/json",
            self.config.api_base.trim_end_matches('/'),
            endpoint
        )
    }

    pub(crate) fn autocomplete_query(&self, input: &str) -> Vec<(&'static str, String)> {
        vec![
            ("input", input.to_string()),
            ("language", self.config.language.clone()),
            ("components", format!("country:{}", self.config.country)),
            ("types", self.config.place_type.clone()),
            ("key", self.config.api_key.clone()),
        ]
    }

    pub(crate) fn details_query(&self, place_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("place_id", place_id.to_string()),
            ("language", self.config.language.clone()),
            ("fields", "address_component".to_string()),
            ("key", self.config.api_key.clone()),
        ]
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, InfrastructureError> {
        // Request URLs carry the API key; keep them out of errors.
        let response = self
            .http
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(InfrastructureError::General(format!(
                "Places API returned HTTP {}",
                status.as_u16()
            )));
        }

        Ok(response.json().await.map_err(reqwest::Error::without_url)?)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionObject>,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictionObject {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    #[serde(default)]
    pub result: Option<DetailsResult>,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

fn status_error(status: &str, error_message: Option<String>) -> String {
    match error_message {
        Some(message) => format!("Places API status {}: {}", status, message),
        None => format!("Places API status {}", status),
    }
}

impl AutocompleteResponse {
    /// Predictions for an `OK` response, nothing for `ZERO_RESULTS`, otherwise the status as error
    pub(crate) fn into_predictions(self) -> Result<Vec<AddressPrediction>, String> {
        match self.status.as_str() {
            STATUS_OK => Ok(self
                .predictions
                .into_iter()
                .map(|p| AddressPrediction {
                    place_id: p.place_id,
                    description: p.description,
                })
                .collect()),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            other => Err(status_error(other, self.error_message)),
        }
    }
}

impl DetailsResponse {
    pub(crate) fn into_components(self) -> Result<Vec<AddressComponent>, String> {
        if self.status != STATUS_OK {
            return Err(status_error(&self.status, self.error_message));
        }
        Ok(self.result.map(|r| r.address_components).unwrap_or_default())
    }
}

#[async_trait]
impl GeocodingServiceTrait for GooglePlacesService {
    async fn autocomplete(&self, input: &str) -> Result<Vec<AddressPrediction>, String> {
        let response: AutocompleteResponse = self
            .fetch("autocomplete", &self.autocomplete_query(input))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Places autocomplete request failed");
                e.to_string()
            })?;

        response.into_predictions().map_err(|e| {
            tracing::error!(error = %e, "Places autocomplete rejected");
            e
        })
    }

    async fn place_details(&self, place_id: &str) -> Result<Vec<AddressComponent>, String> {
        let response: DetailsResponse = self
            .fetch("details", &self.details_query(place_id))
            .await
            .map_err(|e| {
                tracing::error!(place_id, error = %e, "Places details request failed");
                e.to_string()
            })?;

        response.into_components().map_err(|e| {
            tracing::error!(place_id, error = %e, "Places details rejected");
            e
        })
    }
}
