//! Redirect, routing-table and TLS header-echo apps.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use lab_backends::apps::routes::{Payload, ROUTE_TABLE};
use lab_backends::http::X_SERVED_BY;
use lab_backends::AppKind;
use serde_json::json;

mod common;
use common::*;

// --- redirect app ---

#[tokio::test]
async fn test_redirect_statuses_and_locations() {
    let app = app_router(config_for(AppKind::Redirect));

    let cases = [
        ("/redirect-temp", StatusCode::FOUND, "https://crud.labtestdemo.com/items"),
        ("/redirect-perm", StatusCode::MOVED_PERMANENTLY, "https://crud.labtestdemo.com/items"),
        ("/redirect-see-other", StatusCode::SEE_OTHER, "https://crud.labtestdemo.com"),
    ];

    for (path, expected_status, expected_location) in cases {
        let response = send(&app, get(path)).await;
        assert_eq!(response.status(), expected_status, "{path}");
        assert_eq!(response.headers()[header::LOCATION], expected_location, "{path}");
        assert_eq!(response.headers()[X_SERVED_BY], "redirect-app");
    }
}

#[tokio::test]
async fn test_redirect_target_from_config() {
    let mut config = config_for(AppKind::Redirect);
    config.redirect.target_base = "http://crud.internal:8002".into();
    let response = send(&app_router(config), get("/redirect-temp")).await;
    assert_eq!(response.headers()[header::LOCATION], "http://crud.internal:8002/items");
}

#[tokio::test]
async fn test_redirect_banner_and_health() {
    let app = app_router(config_for(AppKind::Redirect));

    let (status, body) = send_json(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"app": "redirect-app", "message": "Click /redirect-temp or /redirect-perm to test redirects"})
    );

    let (_, body) = send_json(&app, get("/health")).await;
    assert_eq!(body, json!({"status": "healthy", "app": "redirect-app"}));
}

#[tokio::test]
async fn test_redirect_app_has_no_items() {
    let app = app_router(config_for(AppKind::Redirect));
    let response = send(&app, get("/items")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// --- routing app ---

#[tokio::test]
async fn test_every_table_route_answers() {
    let app = app_router(config_for(AppKind::Routes));

    for entry in ROUTE_TABLE {
        let (status, body) = send_json(&app, get(entry.path)).await;
        assert_eq!(status, StatusCode::OK, "{}", entry.path);
        assert_eq!(body["app"], "routing-app");
        assert_eq!(body["endpoint"], entry.path);
        match entry.payload {
            Payload::Data(data) => assert_eq!(body["data"], json!(data)),
            Payload::Message(message) => assert_eq!(body["message"], message),
        }
    }
}

#[tokio::test]
async fn test_routing_examples() {
    let app = app_router(config_for(AppKind::Routes));

    let (_, body) = send_json(&app, get("/api/users")).await;
    assert_eq!(
        body,
        json!({"app": "routing-app", "endpoint": "/api/users", "data": ["user1", "user2", "user3"]})
    );

    let (_, body) = send_json(&app, get("/old-path")).await;
    assert_eq!(body["message"], "This is the old path - test rewrite to /new-path");

    let (_, body) = send_json(&app, get("/")).await;
    assert_eq!(body["message"], "Try /api/*, /admin/*, /public/* endpoints");

    let (_, body) = send_json(&app, get("/health")).await;
    assert_eq!(body, json!({"status": "healthy", "app": "routing-app"}));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_router(config_for(AppKind::Routes));
    let response = send(&app, get("/api/unknown")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_routes_are_get_only() {
    let app = app_router(config_for(AppKind::Routes));
    let response = send(&app, json_request("POST", "/api/users", "{}")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- tls app ---

#[tokio::test]
async fn test_tls_banner_and_health() {
    let app = app_router(config_for(AppKind::Tls));

    let (_, body) = send_json(&app, get("/")).await;
    assert_eq!(
        body,
        json!({"app": "tls-app", "message": "This app runs on HTTPS", "tls_enabled": true})
    );

    let (_, body) = send_json(&app, get("/health")).await;
    assert_eq!(body, json!({"status": "healthy", "app": "tls-app", "tls": true}));
}

#[tokio::test]
async fn test_secure_data_defaults_to_direct_https() {
    let app = app_router(config_for(AppKind::Tls));
    let (_, body) = send_json(&app, get("/secure-data")).await;
    assert_eq!(body["protocol"], "direct-https");
    assert_eq!(body["endpoint"], "/secure-data");
}

#[tokio::test]
async fn test_secure_data_echoes_forwarded_proto() {
    let app = app_router(config_for(AppKind::Tls));
    let request = Request::builder()
        .uri("/secure-data")
        .header("X-Forwarded-Proto", "https")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send_json(&app, request).await;
    assert_eq!(body["protocol"], "https");
}

#[tokio::test]
async fn test_secure_data_empty_forwarded_proto_uses_default() {
    let app = app_router(config_for(AppKind::Tls));
    let request = Request::builder()
        .uri("/secure-data")
        .header("X-Forwarded-Proto", "")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send_json(&app, request).await;
    assert_eq!(body["protocol"], "direct-https");
}

#[tokio::test]
async fn test_cert_info_without_client_cert() {
    let app = app_router(config_for(AppKind::Tls));
    let (_, body) = send_json(&app, get("/cert-info")).await;
    assert_eq!(
        body,
        json!({
            "app": "tls-app",
            "endpoint": "/cert-info",
            "client_cert_present": false,
            "client_dn": null,
            "message": "Use this endpoint to verify mTLS configuration"
        })
    );
}

#[tokio::test]
async fn test_cert_info_with_forwarded_client_cert() {
    let app = app_router(config_for(AppKind::Tls));
    let request = Request::builder()
        .uri("/cert-info")
        .header("X-Client-Cert", "MIIB...")
        .header("X-SSL-Client-DN", "CN=lab-client,O=Lab")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send_json(&app, request).await;
    assert_eq!(body["client_cert_present"], true);
    assert_eq!(body["client_dn"], "CN=lab-client,O=Lab");
}

#[tokio::test]
async fn test_static_apps_skip_cors_by_default() {
    let app = app_router(config_for(AppKind::Tls));
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "https://ui.labtestdemo.com")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    assert_eq!(response.headers()[X_SERVED_BY], "tls-app");
}
