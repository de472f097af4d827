//! Catch-all handler serving the embedded single-page frontend
//!
//! The page only talks to `/api/todos`. Unknown `/api` paths stay JSON so
//! API clients never receive HTML.

use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};

use crate::http::error::ApiError;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// Fallback for every unmatched route
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiError::NotFound {
            resource: "route",
            id: path.to_owned(),
        }
        .into_response();
    }

    Html(INDEX_HTML).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::MemoryTodoStore;
    use crate::http::server::{build_router, AppState, ServerConfig};

    fn app() -> axum::Router {
        build_router(AppState::new(MemoryTodoStore::new()), &ServerConfig::default())
    }

    #[tokio::test]
    async fn unknown_path_serves_frontend() {
        let response = app()
            .oneshot(Request::builder().uri("/some/page").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("/api/todos"));
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
