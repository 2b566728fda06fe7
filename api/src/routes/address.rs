use actix_web::{web, HttpResponse};

use sf_core::repositories::VerificationCodeRepository;
use sf_core::services::address::GeocodingServiceTrait;
use sf_core::services::checkout::PaymentGatewayTrait;
use sf_core::services::verification::MailServiceTrait;

use crate::app::AppState;
use crate::dto::{AutocompleteQuery, PlaceDetailsQuery};
use crate::handlers::handle_domain_error;

/// Handler for GET /api/autocomplete-address?input=...
///
/// Responds with `[{"placeId", "description"}]`.
pub async fn autocomplete<R, M, P, G>(
    state: web::Data<AppState<R, M, P, G>>,
    query: web::Query<AutocompleteQuery>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailServiceTrait + 'static,
    P: PaymentGatewayTrait + 'static,
    G: GeocodingServiceTrait + 'static,
{
    match state.address_service.autocomplete(&query.input).await {
        Ok(predictions) => HttpResponse::Ok().json(predictions),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/place-details?placeId=...
///
/// Responds with `{"line1", "line2", "city", "postalCode"}`.
pub async fn place_details<R, M, P, G>(
    state: web::Data<AppState<R, M, P, G>>,
    query: web::Query<PlaceDetailsQuery>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailServiceTrait + 'static,
    P: PaymentGatewayTrait + 'static,
    G: GeocodingServiceTrait + 'static,
{
    match state.address_service.place_details(&query.place_id).await {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(error) => handle_domain_error(error),
    }
}
