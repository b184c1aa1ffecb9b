//! Per-request spans.
//!
//! The span carries the request id so every event logged while handling a
//! request can be correlated with the `x-request-id` the client sees.

use axum::http::Request;
use tracing::Span;

use crate::http::request::X_REQUEST_ID;

/// Span factory for `TraceLayer::make_span_with`.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
