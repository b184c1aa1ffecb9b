//! HTTP error mapping.
//!
//! Every failure a handler can produce ends up here and leaves as a JSON
//! body with a `detail` field: a string for not-found, a list of field
//! errors for rejected input.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the field, e.g. `["body", "price"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// Rejections that are not schema problems (oversized body, ...).
    #[error("{1}")]
    Rejected(StatusCode, String),
}

#[derive(Serialize)]
struct DetailBody<T: Serialize> {
    detail: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(DetailBody { detail })).into_response()
            }
            ApiError::Validation(detail) => {
                tracing::debug!(errors = detail.len(), "Request rejected by validation");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(DetailBody { detail })).into_response()
            }
            ApiError::Rejected(status, detail) => {
                (status, Json(DetailBody { detail })).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound("Item not found".to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let msg = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => {
                let mut loc = vec!["body".to_string()];
                match field_path(&msg) {
                    Some(path) => loc.extend(path.split('.').map(str::to_string)),
                    None => loc.extend(field_from_message(&msg).map(str::to_string)),
                }
                let kind = if msg.contains("missing field") { "missing" } else { "value_error" };
                ApiError::Validation(vec![FieldError { loc, msg, kind }])
            }
            JsonRejection::JsonSyntaxError(_) => {
                ApiError::Validation(vec![FieldError::new(&["body"], msg, "json_invalid")])
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation(vec![FieldError::new(&["header", "content-type"], msg, "content_type")])
            }
            other => ApiError::Rejected(other.status(), msg),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(inner) => ApiError::Validation(vec![
                FieldError::new(&["path", "item_id"], inner.body_text(), "int_parsing"),
            ]),
            other => ApiError::Rejected(other.status(), other.body_text()),
        }
    }
}

/// Pull the failing field path out of a data error like
/// `...target type: price: invalid value: ...`.
///
/// Root-level failures carry no path, and their first `: ` segment is prose
/// (`invalid type`), so anything with whitespace is not a path.
fn field_path(msg: &str) -> Option<&str> {
    let rest = msg.split_once("target type: ").map_or(msg, |(_, rest)| rest);
    let (path, _) = rest.split_once(": ")?;
    if path.is_empty() || path == "." || path.contains(char::is_whitespace) {
        return None;
    }
    Some(path)
}

/// Pull the field name out of a serde message like ``missing field `price` ``.
fn field_from_message(msg: &str) -> Option<&str> {
    let start = msg.find("field `")? + "field `".len();
    let len = msg[start..].find('`')?;
    Some(&msg[start..start + len])
}
