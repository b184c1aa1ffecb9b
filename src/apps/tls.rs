//! TLS app: reports what the terminating proxy forwarded about the client
//! connection. No certificate is inspected here.

use axum::{http::HeaderMap, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

pub const APP_NAME: &str = "tls-app";

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const X_CLIENT_CERT: &str = "x-client-cert";
pub const X_SSL_CLIENT_DN: &str = "x-ssl-client-dn";

#[derive(Debug, Serialize)]
pub struct SecureData {
    pub app: &'static str,
    pub endpoint: &'static str,
    pub protocol: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CertInfo {
    pub app: &'static str,
    pub endpoint: &'static str,
    pub client_cert_present: bool,
    pub client_dn: Option<String>,
    pub message: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/secure-data", get(secure_data))
        .route("/cert-info", get(cert_info))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "app": APP_NAME,
        "message": "This app runs on HTTPS",
        "tls_enabled": true,
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "app": APP_NAME, "tls": true }))
}

async fn secure_data(headers: HeaderMap) -> Json<SecureData> {
    let protocol = header_string(&headers, X_FORWARDED_PROTO)
        .filter(|proto| !proto.is_empty())
        .unwrap_or_else(|| "direct-https".to_string());
    Json(SecureData {
        app: APP_NAME,
        endpoint: "/secure-data",
        protocol,
        message: "Sensitive data delivered over TLS",
    })
}

async fn cert_info(headers: HeaderMap) -> Json<CertInfo> {
    let client_cert_present = headers.contains_key(X_CLIENT_CERT);
    let client_dn = header_string(&headers, X_SSL_CLIENT_DN);
    tracing::debug!(client_cert_present, client_dn = ?client_dn, "Client certificate headers inspected");

    Json(CertInfo {
        app: APP_NAME,
        endpoint: "/cert-info",
        client_cert_present,
        client_dn,
        message: "Use this endpoint to verify mTLS configuration",
    })
}

/// Header value as text; non-UTF-8 values count as absent.
fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
