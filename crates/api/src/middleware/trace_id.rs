//! Request correlation middleware.
//!
//! Every request gets an id (the incoming `x-request-id` header, or a fresh
//! UUID) that tags the request span, the completion log line, and the
//! response headers, so a portal error report can be matched to its logs.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions for handlers that need it.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

pub async fn trace_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        status = tracing::field::Empty,
    );

    let start = std::time::Instant::now();
    let mut response = next.run(req).await;

    span.record("status", response.status().as_u16());
    tracing::info!(
        parent: &span,
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
