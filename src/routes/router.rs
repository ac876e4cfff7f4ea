use crate::config::CorsConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::request_id_middleware;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, CorsLayer};

use super::handlers;

/// Create application router
pub fn create_router(cors: &CorsConfig) -> AppResult<Router> {
    let cors = cors_layer(cors)?;

    // Request-id logging sits outside CORS so preflight requests are logged too.
    Ok(Router::new()
        .route("/", get(handlers::root))
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware)))
}

/// Build the CORS layer from the configured origin allow-list.
///
/// The policy is credentialed, and tower-http panics on the `Any` wildcard
/// for origins, methods, or headers when `allow_credentials(true)` is set.
/// So methods are listed out in full and the preflight's requested headers
/// are mirrored back. Origins match by exact string comparison; a request
/// from any other origin gets no `access-control-allow-origin` header.
fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        let value = origin
            .parse::<HeaderValue>()
            .map_err(|_| AppError::Configuration(format!("Invalid CORS origin: {}", origin)))?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
