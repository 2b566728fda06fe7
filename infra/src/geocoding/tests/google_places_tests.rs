use sf_core::services::address::GeocodingServiceTrait;
use sf_shared::config::GeocodingConfig;

use crate::geocoding::google_places::{AutocompleteResponse, DetailsResponse, GooglePlacesService};

fn service() -> GooglePlacesService {
    GooglePlacesService::new(GeocodingConfig {
        api_key: "maps-key".to_string(),
        ..GeocodingConfig::default()
    })
    .unwrap()
}

fn param<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
}

#[test]
fn test_autocomplete_query_restrictions() {
    let service = service();
    let query = service.autocomplete_query("Hauptstr");

    assert_eq!(param(&query, "input"), Some("Hauptstr"));
    assert_eq!(param(&query, "language"), Some("de"));
    assert_eq!(param(&query, "components"), Some("country:DE"));
    assert_eq!(param(&query, "types"), Some("address"));
    assert_eq!(param(&query, "key"), Some("maps-key"));
}

#[test]
fn test_details_query_requests_address_components() {
    let query = service().details_query("ChIJ123");

    assert_eq!(param(&query, "place_id"), Some("ChIJ123"));
    assert_eq!(param(&query, "fields"), Some("address_component"));
}

#[test]
fn test_autocomplete_ok() {
    let body = r#"{
        "predictions": [
            {"place_id": "ChIJ1", "description": "Hauptstraße 5, Berlin, Deutschland", "types": ["street_address"]},
            {"place_id": "ChIJ2", "description": "Hauptstraße, Potsdam, Deutschland"}
        ],
        "status": "OK"
    }"#;
    let response: AutocompleteResponse = serde_json::from_str(body).unwrap();

    let predictions = response.into_predictions().unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].place_id, "ChIJ1");
    assert_eq!(predictions[1].description, "Hauptstraße, Potsdam, Deutschland");
}

#[test]
fn test_autocomplete_zero_results_is_empty() {
    let response: AutocompleteResponse =
        serde_json::from_str(r#"{"predictions": [], "status": "ZERO_RESULTS"}"#).unwrap();
    assert!(response.into_predictions().unwrap().is_empty());
}

#[test]
fn test_autocomplete_denied_is_error() {
    let response: AutocompleteResponse = serde_json::from_str(
        r#"{"predictions": [], "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
    )
    .unwrap();

    let err = response.into_predictions().unwrap_err();
    assert!(err.contains("REQUEST_DENIED"));
    assert!(err.contains("API key is invalid"));
}

#[test]
fn test_details_ok() {
    let body = r#"{
        "result": {
            "address_components": [
                {"long_name": "5", "short_name": "5", "types": ["street_number"]},
                {"long_name": "Hauptstraße", "short_name": "Hauptstr.", "types": ["route"]},
                {"long_name": "Berlin", "short_name": "Berlin", "types": ["locality", "political"]},
                {"long_name": "10115", "short_name": "10115", "types": ["postal_code"]}
            ]
        },
        "status": "OK"
    }"#;
    let response: DetailsResponse = serde_json::from_str(body).unwrap();

    let components = response.into_components().unwrap();
    assert_eq!(components.len(), 4);
    assert_eq!(components[2].long_name, "Berlin");
    assert_eq!(components[2].types, vec!["locality", "political"]);
}

#[test]
fn test_details_not_found_is_error() {
    let response: DetailsResponse = serde_json::from_str(r#"{"status": "NOT_FOUND"}"#).unwrap();
    assert_eq!(response.into_components().unwrap_err(), "Places API status NOT_FOUND");
}

#[tokio::test]
async fn test_transport_error_omits_api_key() {
    let service = GooglePlacesService::new(GeocodingConfig {
        api_key: "SECRET-MAPS-KEY".to_string(),
        api_base: "http://127.0.0.1:9".to_string(),
        ..GeocodingConfig::default()
    })
    .unwrap();

    let autocomplete = service.autocomplete("Hauptstr").await.unwrap_err();
    assert!(autocomplete.starts_with("HTTP request error"));
    assert!(!autocomplete.contains("SECRET-MAPS-KEY"));

    let details = service.place_details("ChIJ1").await.unwrap_err();
    assert!(!details.contains("SECRET-MAPS-KEY"));
}
