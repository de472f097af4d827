//! PostgreSQL todo store
//!
//! Each operation is a single parameterized statement:
//! - create/update: `RETURNING` the row, so no follow-up SELECT
//! - remove: rows affected decides between success and `NotFound`

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{DbError, Todo, TodoStore};
use crate::models::{TodoId, TodoText};

const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id BIGSERIAL PRIMARY KEY,
        text TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Todo store backed by a shared `PgPool`
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        tracing::info!("Ensuring todos table exists");
        sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, DbError> {
        // id breaks ties between rows inserted within the same clock tick
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, created_at
            FROM todos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Todo, DbError> {
        sqlx::query_as::<_, Todo>("SELECT id, text, created_at FROM todos WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::todo_not_found(id))
    }

    async fn create(&self, text: TodoText) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (text) VALUES ($1) RETURNING id, text, created_at",
        )
        .bind(text.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: TodoText) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET text = $1 WHERE id = $2 RETURNING id, text, created_at",
        )
        .bind(text.as_str())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::todo_not_found(id))?;

        tracing::debug!(id = todo.id, "updated todo");
        Ok(todo)
    }

    async fn remove(&self, id: TodoId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found(id));
        }

        tracing::debug!(%id, "deleted todo");
        Ok(())
    }
}
