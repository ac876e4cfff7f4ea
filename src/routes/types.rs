use serde::Serialize;

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub message: String,
}
