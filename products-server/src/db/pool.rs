//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connect options are malformed or the
/// first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, config.max_connections).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        target_db = %config.display_target(),
        max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options()?)
        .await
}
