use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::VerificationCodeRepository;
use sf_core::services::address::GeocodingServiceTrait;
use sf_core::services::checkout::PaymentGatewayTrait;
use sf_core::services::verification::MailServiceTrait;
use sf_shared::utils::validation::mask_email;

use crate::app::AppState;
use crate::dto::{CheckoutPayload, CheckoutResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /api/checkout
///
/// # Request Body
///
/// ```json
/// {
///     "verificationCode": "042137",
///     "name": "Erika Mustermann",
///     "email": "erika@example.com",
///     "phone": "+49301234567",
///     "address": {"line1": "Hauptstraße 5", "line2": "", "city": "Berlin", "postalCode": "10115"}
/// }
/// ```
///
/// # Response
///
/// `200 {"url": "..."}` with the hosted payment page. `401` when the code is
/// wrong, missing or expired; the payment provider is not contacted then.
pub async fn checkout<R, M, P, G>(
    state: web::Data<AppState<R, M, P, G>>,
    payload: web::Json<CheckoutPayload>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailServiceTrait + 'static,
    P: PaymentGatewayTrait + 'static,
    G: GeocodingServiceTrait + 'static,
{
    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    let payload = payload.into_inner();
    let masked = mask_email(&payload.email);

    match state.checkout_service.checkout(payload.into()).await {
        Ok(session) => {
            tracing::info!(email = %masked, session_id = %session.id, "Checkout session started");
            HttpResponse::Ok().json(CheckoutResponse { url: session.url })
        }
        Err(error) => handle_domain_error(error),
    }
}
