//! The demo apps a process can serve.
//!
//! # Data Flow
//! ```text
//! LabConfig.app
//!     → AppKind
//!     → crud.rs | redirect.rs | routes.rs | tls.rs (app router + state)
//!     → http/server.rs wraps it in the shared middleware stack
//! ```
//!
//! # Design Decisions
//! - One app per process, mirroring one backend per pool member
//! - Every app answers `GET /` with a banner and `GET /health` with a
//!   static liveness body
//! - Only the CRUD app holds state that changes at runtime

pub mod crud;
pub mod redirect;
pub mod routes;
pub mod tls;

use std::fmt;

use axum::{Json, Router};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::LabConfig;
use crate::store::ItemStore;

/// Which demo app to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    /// In-memory item store behind CRUD verbs.
    #[default]
    Crud,
    /// Fixed 301/302/303 responses.
    Redirect,
    /// Static path table for path-based routing.
    Routes,
    /// Forwarded TLS/mTLS header echo.
    Tls,
}

impl AppKind {
    /// Name reported in bodies and the `x-served-by` header.
    pub fn app_name(self) -> &'static str {
        match self {
            AppKind::Crud => crud::APP_NAME,
            AppKind::Redirect => redirect::APP_NAME,
            AppKind::Routes => routes::APP_NAME,
            AppKind::Tls => tls::APP_NAME,
        }
    }

    /// Port the app listens on when no bind address is configured.
    pub fn default_port(self) -> u16 {
        match self {
            AppKind::Crud => 8002,
            AppKind::Redirect => 8001,
            AppKind::Routes => 8003,
            AppKind::Tls => 8443,
        }
    }

    pub fn cors_by_default(self) -> bool {
        matches!(self, AppKind::Crud)
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.app_name())
    }
}

/// Build the bare router (no middleware) for the configured app.
pub fn router(config: &LabConfig) -> Router {
    match config.app {
        AppKind::Crud => {
            let store = if config.crud.seed {
                ItemStore::seeded()
            } else {
                ItemStore::new()
            };
            crud::router(store)
        }
        AppKind::Redirect => redirect::router(&config.redirect),
        AppKind::Routes => routes::router(),
        AppKind::Tls => tls::router(),
    }
}

/// `{"status": "healthy", "app": <name>}`
pub(crate) fn health_body(app: &'static str) -> Json<Value> {
    Json(json!({ "status": "healthy", "app": app }))
}

/// `{"app": <name>, "message": <message>}`
pub(crate) fn banner(app: &'static str, message: &'static str) -> Json<Value> {
    Json(json!({ "app": app, "message": message }))
}
