//! Mapping of domain errors and extractor failures to HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use serde_json::json;
use validator::ValidationErrors;

use sf_core::errors::DomainError;
use sf_shared::types::ErrorResponse;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
        DomainError::Internal { .. } | DomainError::ExternalService { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if status.is_server_error() {
        tracing::error!(error = %error, code = error.code(), "Request failed");
    } else {
        tracing::info!(error = %error, code = error.code(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(error.code(), error.public_message()))
}

/// 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<&str> = errors.field_errors().keys().copied().collect();

    tracing::info!(?fields, "Request body failed validation");

    HttpResponse::BadRequest().json(
        ErrorResponse::new("VALIDATION_ERROR", "Invalid request data").with_detail("fields", json!(fields)),
    )
}

/// `JsonConfig` error handler: malformed or oversized bodies become 400 envelopes
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Expected an application/json body".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body too large".to_string()
        }
        other => format!("Malformed request body: {}", other),
    };

    let response = HttpResponse::BadRequest().json(ErrorResponse::new("INVALID_REQUEST_BODY", message));
    InternalError::from_response(err, response).into()
}

/// `QueryConfig` error handler
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "INVALID_QUERY",
        format!("Malformed query string: {}", err),
    ));
    InternalError::from_response(err, response).into()
}
