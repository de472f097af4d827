//! Database layer - connection pool and todo stores
//!
//! # Design Principles
//!
//! - The pool is built by the caller and handed to `PgTodoStore::new`
//! - Every statement binds its parameters, no SQL is assembled from input
//! - One statement per operation (`RETURNING` instead of write-then-read)

#[cfg(test)]
pub(crate) mod failing;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryTodoStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgTodoStore;
pub use store::{DbError, Todo, TodoStore};
