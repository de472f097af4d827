//! Store whose every call fails, for exercising the 500/503 paths

use async_trait::async_trait;

use super::store::{DbError, Todo, TodoStore};
use crate::models::{TodoId, TodoText};

/// Detail text that must never reach an HTTP client
pub(crate) const FAILURE_DETAIL: &str = "relation \"todos\" does not exist";

pub(crate) struct FailingTodoStore;

fn failure() -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(FAILURE_DETAIL.into()))
}

#[async_trait]
impl TodoStore for FailingTodoStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> Result<Vec<Todo>, DbError> {
        Err(failure())
    }

    async fn get_by_id(&self, _id: TodoId) -> Result<Todo, DbError> {
        Err(failure())
    }

    async fn create(&self, _text: TodoText) -> Result<Todo, DbError> {
        Err(failure())
    }

    async fn update(&self, _id: TodoId, _text: TodoText) -> Result<Todo, DbError> {
        Err(failure())
    }

    async fn remove(&self, _id: TodoId) -> Result<(), DbError> {
        Err(failure())
    }
}
