use actix_web::{web, HttpResponse};

use sf_core::repositories::VerificationCodeRepository;
use sf_core::services::address::GeocodingServiceTrait;
use sf_core::services::checkout::PaymentGatewayTrait;
use sf_core::services::verification::MailServiceTrait;

use crate::app::AppState;
use crate::dto::VerifyQuery;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/verify?email=...
///
/// Mails a fresh code, replacing any earlier one for the address.
/// Responds `200 "Code sent"`, `400` for a malformed address and `500` when
/// the code cannot be stored or mailed.
pub async fn request_code<R, M, P, G>(
    state: web::Data<AppState<R, M, P, G>>,
    query: web::Query<VerifyQuery>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailServiceTrait + 'static,
    P: PaymentGatewayTrait + 'static,
    G: GeocodingServiceTrait + 'static,
{
    match state.verification_service.request_code(&query.email).await {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("Code sent"),
        Err(error) => handle_domain_error(error),
    }
}
