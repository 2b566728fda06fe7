//! MySQL pool for the verification code store

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use sf_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Shared handle to the code store's connection pool
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect using the pool limits and timeouts from `config`
    ///
    /// Statements are logged at debug level; anything slower than
    /// `slow_query_threshold` milliseconds is logged as a warning.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "db_connect_failed", "Could not reach the code store");
                InfrastructureError::Database(e)
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            event = "db_connected",
            "Code store pool ready"
        );

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip `SELECT 1`; `Ok(false)` means the server answered with something else
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(value == 1)
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(event = "db_closed", "Code store pool closed");
    }

    /// Create or update the `codes` table from `infra/migrations`
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!(event = "db_migrated", "Code store schema up to date");
        Ok(())
    }
}

/// Point-in-time pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections in use ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
