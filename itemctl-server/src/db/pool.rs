//! Database connection pool management
//!
//! One `MySqlPool` is built at startup and shared for the process lifetime.
//! It is pinged before the server binds its listener.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{Connection, MySqlPool};

use crate::config::DatabaseConfig;

/// Create a MariaDB/MySQL connection pool and verify it is reachable.
///
/// # Errors
///
/// Returns an error if the connection or the ping fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    ping(&pool).await?;
    tracing::debug!(max_connections = config.max_connections, "database pool ready");

    Ok(pool)
}

/// Liveness check on one pooled connection.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
