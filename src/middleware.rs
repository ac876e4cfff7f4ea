use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Request ID wrapper stored in request extensions
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RequestId(pub String);

/// Take the caller-provided `x-request-id`, or mint a new one.
fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Request ID middleware - tags each request with a unique ID, stores it in
/// the request extensions, logs the request and its outcome, and echoes the
/// ID on the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = request_id_from(req.headers());

    // Add request ID to request extensions for use in handlers
    req.extensions_mut().insert(RequestId(request_id.clone()));

    tracing::info!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        "Incoming request"
    );

    let mut response = next.run(req).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    // Add request ID to response headers
    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", header_value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::get;
    use axum::{Extension, Router};
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn test_request_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req-123".parse().unwrap());

        assert_eq!(request_id_from(&headers), "req-123");
    }

    #[test]
    fn test_request_id_generated_when_missing() {
        let headers = HeaderMap::new();

        let id = request_id_from(&headers);
        assert_eq!(id.len(), 36); // UUID v4 length
    }

    #[test]
    fn test_request_id_generated_for_unreadable_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_bytes(b"\xff").unwrap());

        let id = request_id_from(&headers);
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn test_request_id_stored_in_extensions() {
        async fn show_id(Extension(id): Extension<RequestId>) -> String {
            id.0
        }

        let app = Router::new()
            .route("/", get(show_id))
            .layer(axum::middleware::from_fn(request_id_middleware));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "req-ext-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"req-ext-1");
    }
}
