//! Redirect app: fixed 3xx responses for testing Location rewrites.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};

use crate::config::schema::RedirectConfig;
use crate::http::response::redirect;

pub const APP_NAME: &str = "redirect-app";

/// Resolved redirect destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Where 301 and 302 point.
    pub items: String,
    /// Where 303 points.
    pub base: String,
}

impl RedirectTargets {
    pub fn from_config(config: &RedirectConfig) -> Self {
        let base = config.target_base.trim_end_matches('/').to_string();
        Self {
            items: format!("{}/items", base),
            base,
        }
    }
}

pub fn router(config: &RedirectConfig) -> Router {
    let targets = Arc::new(RedirectTargets::from_config(config));
    tracing::debug!(items = %targets.items, base = %targets.base, "Redirect targets resolved");

    Router::new()
        .route(
            "/",
            get(|| async {
                super::banner(APP_NAME, "Click /redirect-temp or /redirect-perm to test redirects")
            }),
        )
        .route("/redirect-temp", get(redirect_temporary))
        .route("/redirect-perm", get(redirect_permanent))
        .route("/redirect-see-other", get(redirect_see_other))
        .route("/health", get(|| async { super::health_body(APP_NAME) }))
        .with_state(targets)
}

async fn redirect_temporary(State(targets): State<Arc<RedirectTargets>>) -> Response {
    redirect(StatusCode::FOUND, &targets.items)
}

async fn redirect_permanent(State(targets): State<Arc<RedirectTargets>>) -> Response {
    redirect(StatusCode::MOVED_PERMANENTLY, &targets.items)
}

async fn redirect_see_other(State(targets): State<Arc<RedirectTargets>>) -> Response {
    redirect(StatusCode::SEE_OTHER, &targets.base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_from_default_config() {
        let targets = RedirectTargets::from_config(&RedirectConfig::default());
        assert_eq!(targets.items, "https://crud.labtestdemo.com/items");
        assert_eq!(targets.base, "https://crud.labtestdemo.com");
    }

    #[test]
    fn test_trailing_slash_not_doubled() {
        let targets = RedirectTargets::from_config(&RedirectConfig {
            target_base: "http://crud.internal:8002/".into(),
        });
        assert_eq!(targets.items, "http://crud.internal:8002/items");
        assert_eq!(targets.base, "http://crud.internal:8002");
    }
}
