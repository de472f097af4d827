//! Storage contract shared by every todo backend

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::models::{TodoId, TodoText};

/// Todo record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn todo_not_found(id: TodoId) -> Self {
        Self::NotFound {
            resource: "todo",
            id: id.to_string(),
        }
    }
}

/// Todo storage operations.
///
/// Handlers only see this trait, so tests can swap the PostgreSQL store
/// for [`MemoryTodoStore`](super::MemoryTodoStore).
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Create the backing table if it does not exist. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// Cheap readiness check; `Err` means requests would fail right now.
    async fn ping(&self) -> Result<(), DbError>;

    /// All todos, newest first.
    async fn list_all(&self) -> Result<Vec<Todo>, DbError>;

    async fn get_by_id(&self, id: TodoId) -> Result<Todo, DbError>;

    async fn create(&self, text: TodoText) -> Result<Todo, DbError>;

    /// Replace the text of an existing todo. `created_at` is left untouched.
    async fn update(&self, id: TodoId, text: TodoText) -> Result<Todo, DbError>;

    /// Delete a todo; `NotFound` when no row matched.
    async fn remove(&self, id: TodoId) -> Result<(), DbError>;
}
