//! Response decoration.
//!
//! # Responsibilities
//! - Stamp every response with the name of the app that produced it
//! - Build redirect responses with an explicit status code
//!
//! # Design Decisions
//! - `x-served-by` lets a load balancer test tell backends apart without
//!   parsing bodies
//! - Redirects set `Location` verbatim; no rewriting happens here

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;

/// Header naming the app that served a response.
pub const X_SERVED_BY: &str = "x-served-by";

/// Layer adding `x-served-by: <app>` to every response.
pub fn served_by_layer(app: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(X_SERVED_BY),
        HeaderValue::from_static(app),
    )
}

/// A redirect with the given 3xx status and `Location`.
pub fn redirect(status: StatusCode, location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (status, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::error!(location, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_sets_location() {
        let response = redirect(StatusCode::MOVED_PERMANENTLY, "https://example.com/items");
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/items"
        );
    }

    #[test]
    fn test_redirect_rejects_control_characters() {
        let response = redirect(StatusCode::FOUND, "https://example.com/\n");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
