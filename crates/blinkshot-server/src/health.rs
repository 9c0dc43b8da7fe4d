use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
