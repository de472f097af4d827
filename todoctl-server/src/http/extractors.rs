//! Custom Axum extractors
//!
//! Rejections become `ApiError::Validation`, so malformed ids and bodies get
//! the same 400 JSON shape as blank text.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::{TodoId, ValidationError};

/// Extract and validate a todo id from path
pub struct ValidTodoId(pub TodoId);

impl<S> FromRequestParts<S> for ValidTodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(TodoId::format_error()))?;

        Ok(Self(id.parse()?))
    }
}

/// JSON body whose rejection is reported as a validation error
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                detail: rejection.body_text(),
            })
        })?;
        Ok(Self(value))
    }
}
