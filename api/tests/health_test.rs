//! Integration tests for GET /health

mod common;

use actix_web::{http::StatusCode, test};

use common::TestContextBuilder;
use sf_api::create_app;

#[actix_web::test]
async fn test_health_without_database() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "storefront-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
