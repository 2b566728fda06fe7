use actix_web::{web, HttpResponse};

use sf_infra::database::DatabasePool;
use sf_shared::types::{HealthResponse, HealthStatus};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "storefront-api";

/// Handler for GET /health
///
/// Probes the database when a pool is registered as app data.
pub async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let status = match pool {
        None => HealthStatus::Healthy,
        Some(pool) => match pool.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::Degraded,
            Err(e) => {
                tracing::error!(error = %e, "Database health check failed");
                HealthStatus::Unhealthy
            }
        },
    };

    let body = HealthResponse::new(status, SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    match status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
        _ => HttpResponse::Ok().json(body),
    }
}
