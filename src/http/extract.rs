//! Extractors whose rejections render as [`ApiError`].
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies and a mix of
//! 400/415/422; these wrappers route every rejection through `ApiError` so
//! schema failures are always 422 with field detail.

use axum::extract::{FromRequest, FromRequestParts};

use crate::http::error::ApiError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);
