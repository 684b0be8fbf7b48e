//! Database connection pool management

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use ba_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from the application configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create database pool");
            InfrastructureError::Database(e)
        })?;

    tracing::info!("Database connection pool created");
    Ok(pool)
}

/// Verify connectivity with a trivial round trip
pub async fn health_check(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(InfrastructureError::Database)
}
