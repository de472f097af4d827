//! todoctl-server: todo CRUD over HTTP
//!
//! Three layers, composed by the caller:
//! - `models`: validated input types
//! - `db`: the `TodoStore` trait, its PostgreSQL and in-memory implementations
//! - `http`: axum router, error mapping and server loop

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryTodoStore, PgTodoStore, Todo, TodoStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
