//! In-memory todo store
//!
//! Same contract as the PostgreSQL store. Backs the router tests and
//! `todoctl serve --ephemeral`. The lock is never held across an await.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::store::{DbError, Todo, TodoStore};
use crate::models::{TodoId, TodoText};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// Process-local todo store; contents are lost on drop
#[derive(Default)]
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        // Mutations are single map calls, so a poisoned guard is still consistent
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, DbError> {
        Ok(self.with_inner(|inner| {
            let mut todos: Vec<Todo> = inner.rows.values().cloned().collect();
            todos.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
            todos
        }))
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Todo, DbError> {
        self.with_inner(|inner| inner.rows.get(&id.get()).cloned())
            .ok_or_else(|| DbError::todo_not_found(id))
    }

    async fn create(&self, text: TodoText) -> Result<Todo, DbError> {
        Ok(self.with_inner(|inner| {
            inner.next_id += 1;
            let todo = Todo {
                id: inner.next_id,
                text: text.into_string(),
                created_at: Utc::now(),
            };
            inner.rows.insert(todo.id, todo.clone());
            todo
        }))
    }

    async fn update(&self, id: TodoId, text: TodoText) -> Result<Todo, DbError> {
        self.with_inner(|inner| {
            inner.rows.get_mut(&id.get()).map(|todo| {
                todo.text = text.into_string();
                todo.clone()
            })
        })
        .ok_or_else(|| DbError::todo_not_found(id))
    }

    async fn remove(&self, id: TodoId) -> Result<(), DbError> {
        self.with_inner(|inner| inner.rows.remove(&id.get()))
            .map(|_| ())
            .ok_or_else(|| DbError::todo_not_found(id))
    }
}
