//! Application state and factory

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, Condition},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sf_core::repositories::VerificationCodeRepository;
use sf_core::services::address::{AddressService, GeocodingServiceTrait};
use sf_core::services::checkout::{CheckoutService, CheckoutServiceConfig, PaymentGatewayTrait};
use sf_core::services::verification::{MailServiceTrait, VerificationService, VerificationServiceConfig};
use sf_shared::config::AppConfig;
use sf_shared::types::ErrorResponse;

use crate::handlers::{json_error_handler, query_error_handler};
use crate::middleware::{create_cors, RateLimiter};
use crate::routes::{address, checkout, health, verify};

/// Application state that holds shared services
pub struct AppState<R, M, P, G>
where
    R: VerificationCodeRepository,
    M: MailServiceTrait,
    P: PaymentGatewayTrait,
    G: GeocodingServiceTrait,
{
    pub verification_service: Arc<VerificationService<R, M>>,
    pub checkout_service: Arc<CheckoutService<R, M, P>>,
    pub address_service: Arc<AddressService<G>>,
}

impl<R, M, P, G> AppState<R, M, P, G>
where
    R: VerificationCodeRepository,
    M: MailServiceTrait,
    P: PaymentGatewayTrait,
    G: GeocodingServiceTrait,
{
    /// Wire the services; checkout shares the verification service
    pub fn new(
        repository: Arc<R>,
        mail_service: Arc<M>,
        payment_gateway: Arc<P>,
        geocoding: Arc<G>,
        verification_config: VerificationServiceConfig,
        checkout_config: CheckoutServiceConfig,
    ) -> Self {
        Self::from_verification_service(
            Arc::new(VerificationService::new(repository, mail_service, verification_config)),
            payment_gateway,
            geocoding,
            checkout_config,
        )
    }

    /// Wire around an already configured verification service
    pub fn from_verification_service(
        verification_service: Arc<VerificationService<R, M>>,
        payment_gateway: Arc<P>,
        geocoding: Arc<G>,
        checkout_config: CheckoutServiceConfig,
    ) -> Self {
        Self {
            checkout_service: Arc::new(CheckoutService::new(
                verification_service.clone(),
                payment_gateway,
                checkout_config,
            )),
            verification_service,
            address_service: Arc::new(AddressService::new(geocoding)),
        }
    }
}

/// Create and configure the application with all dependencies
///
/// `rate_limiter` is shared by every worker so the per-IP budget is global
/// to the process.
pub fn create_app<R, M, P, G>(
    app_state: web::Data<AppState<R, M, P, G>>,
    config: &AppConfig,
    rate_limiter: RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: VerificationCodeRepository + 'static,
    M: MailServiceTrait + 'static,
    P: PaymentGatewayTrait + 'static,
    G: GeocodingServiceTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        // Last wrap runs first: tracing, then compression, then CORS
        .wrap(create_cors(&config.cors))
        .wrap(Condition::new(config.server.enable_compression, Compress::default()))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/api/verify")
                .route(web::get().to(verify::request_code::<R, M, P, G>))
                .wrap(rate_limiter.clone()),
        )
        .service(
            web::resource("/api/checkout").route(web::post().to(checkout::checkout::<R, M, P, G>)),
        )
        .service(
            web::resource("/api/autocomplete-address")
                .route(web::get().to(address::autocomplete::<R, M, P, G>))
                .wrap(rate_limiter.clone()),
        )
        .service(
            web::resource("/api/place-details")
                .route(web::get().to(address::place_details::<R, M, P, G>))
                .wrap(rate_limiter),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
