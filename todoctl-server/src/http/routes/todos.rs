//! Todo endpoints
//!
//! Validation runs before any store call; the store only ever sees
//! `TodoText`.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::Todo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidTodoId};
use crate::http::server::AppState;
use crate::models::TodoText;

/// Create/update request body
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Todo response
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub text: String,
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            text: t.text,
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

/// GET /api/todos - list all todos, newest first
async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /api/todos/{id} - get a single todo
async fn get_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state.store.get_by_id(id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// POST /api/todos - create a todo
async fn create_todo(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let text = TodoText::from_field(req.text.as_deref())?;
    let todo = state.store.create(text).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// PUT /api/todos/{id} - replace a todo's text
async fn update_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
    JsonBody(req): JsonBody<TodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let text = TodoText::from_field(req.text.as_deref())?;
    let todo = state.store.update(id, text).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /api/todos/{id} - 404 when the id is unknown, including repeats
async fn delete_todo(
    State(state): State<AppState>,
    ValidTodoId(id): ValidTodoId,
) -> Result<StatusCode, ApiError> {
    state.store.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
