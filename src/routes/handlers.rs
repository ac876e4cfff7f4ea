use crate::routes::types::ApiStatusResponse;
use axum::response::IntoResponse;
use axum::Json;

/// Root endpoint: report that the API is up.
///
/// Ignores all request content and returns the same payload on every call.
pub async fn root() -> impl IntoResponse {
    Json(ApiStatusResponse {
        message: "API is running".to_string(),
    })
}
