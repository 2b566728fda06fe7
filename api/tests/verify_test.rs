//! Integration tests for GET /api/verify

mod common;

use actix_web::{http::StatusCode, test};

use common::TestContextBuilder;
use sf_api::create_app;

#[actix_web::test]
async fn test_verify_sends_code() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/verify?email=erika%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Code sent");

    assert_eq!(ctx.repository.count().await, 1);
    let message = ctx.mail.last_message_to("erika@example.com").await.unwrap();
    assert_eq!(message.subject, "Dein Verifizierungscode für Storefront");
    let stored = ctx.repository.get("erika@example.com").await.unwrap();
    assert!(message.text.contains(&stored.code));
}

#[actix_web::test]
async fn test_verify_rejects_malformed_email() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/verify?email=not-an-email")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_EMAIL");
    assert_eq!(body["message"], "Invalid email");

    assert_eq!(ctx.repository.count().await, 0);
    assert_eq!(ctx.mail.sent_count().await, 0);
}

#[actix_web::test]
async fn test_verify_missing_email_is_bad_request() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get().uri("/api/verify").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_verify_mail_failure_is_server_error() {
    let ctx = TestContextBuilder::new().build();
    ctx.mail.set_should_fail(true);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/verify?email=erika%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Failed to send email");
    assert_eq!(ctx.repository.count().await, 0);
}

#[actix_web::test]
async fn test_verify_store_failure_is_server_error() {
    let ctx = TestContextBuilder::new().build();
    ctx.repository.set_fail_writes(true);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get()
        .uri("/api/verify?email=erika%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ctx.mail.sent_count().await, 0);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContextBuilder::new().build();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config, ctx.limiter())).await;

    let req = test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
