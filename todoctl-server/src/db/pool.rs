//! PostgreSQL pool construction
//!
//! The pool is built once at startup and handed to `PgTodoStore::new`;
//! queueing beyond `max_connections` is left to sqlx.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect with the default connection cap.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with an explicit connection cap (clamped to at least one).
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let max_connections = effective_max_connections(max_connections);
    tracing::debug!(max_connections, "connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "database pool ready");
    Ok(pool)
}

fn effective_max_connections(requested: u32) -> u32 {
    requested.max(1)
}
