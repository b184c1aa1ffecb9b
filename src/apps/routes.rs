//! Routing app: a static table of paths for path-based routing and rewrite
//! rules.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub const APP_NAME: &str = "routing-app";

/// What a table entry answers with.
#[derive(Debug, Clone, Copy)]
pub enum Payload {
    Data(&'static [&'static str]),
    Message(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub payload: Payload,
}

impl StaticRoute {
    pub fn body(&self) -> Value {
        match self.payload {
            Payload::Data(data) => json!({ "app": APP_NAME, "endpoint": self.path, "data": data }),
            Payload::Message(message) => {
                json!({ "app": APP_NAME, "endpoint": self.path, "message": message })
            }
        }
    }
}

pub const ROUTE_TABLE: &[StaticRoute] = &[
    StaticRoute { path: "/api/users", payload: Payload::Data(&["user1", "user2", "user3"]) },
    StaticRoute { path: "/api/products", payload: Payload::Data(&["laptop", "phone", "tablet"]) },
    StaticRoute { path: "/api/orders", payload: Payload::Data(&["order123", "order456"]) },
    StaticRoute { path: "/admin/dashboard", payload: Payload::Message("Admin Dashboard") },
    StaticRoute { path: "/admin/settings", payload: Payload::Message("Admin Settings") },
    StaticRoute { path: "/public/info", payload: Payload::Message("Public Information") },
    StaticRoute { path: "/public/contact", payload: Payload::Message("Contact Us") },
    StaticRoute {
        path: "/old-path",
        payload: Payload::Message("This is the old path - test rewrite to /new-path"),
    },
    StaticRoute {
        path: "/new-path",
        payload: Payload::Message("Successfully rewritten to new path!"),
    },
];

pub fn router() -> Router {
    let base = Router::new()
        .route(
            "/",
            get(|| async { super::banner(APP_NAME, "Try /api/*, /admin/*, /public/* endpoints") }),
        )
        .route("/health", get(|| async { super::health_body(APP_NAME) }));

    ROUTE_TABLE.iter().fold(base, |router, entry| {
        router.route(entry.path, get(move || async move { Json(entry.body()) }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = ROUTE_TABLE.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn test_data_body() {
        assert_eq!(
            ROUTE_TABLE[2].body(),
            json!({"app": "routing-app", "endpoint": "/api/orders", "data": ["order123", "order456"]})
        );
    }

    #[test]
    fn test_message_body() {
        let entry = ROUTE_TABLE.iter().find(|r| r.path == "/new-path").unwrap();
        assert_eq!(entry.body()["message"], "Successfully rewritten to new path!");
    }
}
