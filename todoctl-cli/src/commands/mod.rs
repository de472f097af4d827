//! Command implementations for todoctl CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use todoctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use todoctl_server::db::{create_pool_with_options, PgTodoStore, TodoStore};

/// Database connection options shared by commands that touch PostgreSQL
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string (sslmode in the URL controls TLS)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect and make sure the todos table exists.
    ///
    /// Any failure aborts startup; the server never runs against a missing table.
    pub async fn connect_store(&self) -> Result<PgTodoStore> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        let store = PgTodoStore::new(pool);
        store
            .ensure_schema()
            .await
            .context("Failed to ensure todos table exists")?;

        Ok(store)
    }
}
