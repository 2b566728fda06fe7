//! Integration tests for the address lookup routes

mod common;

use std::sync::atomic::Ordering;

use actix_web::{http::StatusCode, test};

use common::{berlin_components, TestContextBuilder};
use sf_api::create_app;
use sf_core::services::address::MockGeocodingService;

#[actix_web::test]
async fn test_autocomplete_returns_predictions() {
    let geocoding = MockGeocodingService::new()
        .with_prediction("ChIJ1", "Hauptstraße 5, Berlin, Deutschland")
        .with_prediction("ChIJ2", "Hauptstraße, Potsdam, Deutschland");
    let ctx = TestContextBuilder::new().geocoding(geocoding).build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/autocomplete-address?input=Hauptstr")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let predictions = body.as_array().unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0]["placeId"], "ChIJ1");
    assert_eq!(predictions[0]["description"], "Hauptstraße 5, Berlin, Deutschland");
}

#[actix_web::test]
async fn test_autocomplete_blank_input_is_empty() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/autocomplete-address?input=")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, serde_json::json!([]));
    assert_eq!(ctx.geocoding.call_count(), 0);
}

#[actix_web::test]
async fn test_autocomplete_provider_failure() {
    let ctx = TestContextBuilder::new().build();
    ctx.geocoding.should_fail.store(true, Ordering::SeqCst);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/autocomplete-address?input=Hauptstr")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to autocomplete address");
}

#[actix_web::test]
async fn test_place_details_maps_components() {
    let geocoding = MockGeocodingService::new().with_place("ChIJ1", berlin_components());
    let ctx = TestContextBuilder::new().geocoding(geocoding).build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/place-details?placeId=ChIJ1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "line1": "Hauptstraße 5",
            "line2": "",
            "city": "Berlin",
            "postalCode": "10115"
        })
    );
}

#[actix_web::test]
async fn test_place_details_unknown_place() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/place-details?placeId=missing")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to get place details");
}

#[actix_web::test]
async fn test_place_details_missing_id() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get().uri("/api/place-details").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.geocoding.call_count(), 0);
}
