use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};

use sf_api::middleware::RateLimiter;
use sf_api::telemetry::init_tracing;
use sf_api::{create_app, AppState};
use sf_core::services::checkout::CheckoutServiceConfig;
use sf_core::services::verification::VerificationServiceConfig;
use sf_infra::database::{DatabasePool, MySqlVerificationCodeRepository};
use sf_infra::geocoding::GooglePlacesService;
use sf_infra::mail::{create_mail_service, MailSender};
use sf_infra::payment::StripePaymentGateway;
use sf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate()?;

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting storefront API"
    );

    let db = DatabasePool::new(config.database.clone()).await?;
    if config.database.run_migrations {
        db.run_migrations().await?;
    }
    tracing::info!(stats = %db.get_statistics(), "Database ready");

    let repository = Arc::new(MySqlVerificationCodeRepository::new(db.get_pool().clone()));

    let mail = create_mail_service(&config.mail);
    if let MailSender::Smtp(smtp) = &mail {
        match smtp.test_connection().await {
            Ok(true) => tracing::info!("SMTP relay reachable"),
            Ok(false) => tracing::warn!("SMTP relay did not accept the connection test"),
            Err(e) => tracing::warn!(error = %e, "SMTP relay unreachable at startup"),
        }
    }
    tracing::info!(transport = mail.transport_name(), "Mail service configured");

    let payment = Arc::new(StripePaymentGateway::new(&config.payment));
    let geocoding = Arc::new(GooglePlacesService::new(config.geocoding.clone())?);

    let state = web::Data::new(AppState::new(
        repository,
        Arc::new(mail),
        payment,
        geocoding,
        VerificationServiceConfig::from_app_config(&config),
        CheckoutServiceConfig::from_payment_config(&config.payment),
    ));
    let rate_limiter = RateLimiter::new(config.rate_limit.clone());
    let db_data = web::Data::new(db.clone());

    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &app_config, rate_limiter.clone()).app_data(db_data.clone())
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.server.bind_address())?.run().await?;

    db.close().await;
    tracing::info!("Storefront API stopped");
    Ok(())
}
