//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo
//! backends. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::apps::AppKind;

/// Root configuration for a demo backend process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LabConfig {
    /// Which app this process serves.
    pub app: AppKind,

    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// HTTP middleware settings.
    pub http: HttpConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// CRUD app settings.
    pub crud: CrudConfig,

    /// Redirect app settings.
    pub redirect: RedirectConfig,
}

impl LabConfig {
    /// Resolve the bind address, falling back to the app's conventional port.
    pub fn bind_address(&self) -> String {
        self.listener
            .bind_address
            .clone()
            .unwrap_or_else(|| format!("0.0.0.0:{}", self.app.default_port()))
    }

    /// Whether CORS headers are emitted, falling back to the app's default.
    pub fn cors_enabled(&self) -> bool {
        self.http.cors.unwrap_or_else(|| self.app.cors_by_default())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8002"). Unset means the app's default port.
    pub bind_address: Option<String>,

    /// Optional TLS configuration. When set the listener speaks HTTPS.
    pub tls: Option<TlsConfig>,
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// HTTP middleware configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Allow any origin/method/header. Unset means the app decides.
    pub cors: Option<bool>,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors: None,
            max_body_size: 64 * 1024,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` string). `RUST_LOG` overrides it.
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// CRUD app configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrudConfig {
    /// Start with the five sample rows instead of an empty store.
    pub seed: bool,
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Redirect app configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Absolute base URL that redirects point at.
    pub target_base: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            target_base: "https://crud.labtestdemo.com".to_string(),
        }
    }
}
