//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lab_backends::{AppKind, HttpServer, LabConfig, Shutdown};
use tower::ServiceExt;

/// Default config for `app`, as the binary would build it.
pub fn config_for(app: AppKind) -> LabConfig {
    LabConfig {
        app,
        ..LabConfig::default()
    }
}

/// The fully layered router for `config`.
pub fn app_router(config: LabConfig) -> Router {
    HttpServer::new(config).router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a clone of `router`.
pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a request and return status plus decoded JSON body.
pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = send(router, request).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// Start a real server on an ephemeral port.
///
/// The server stops when the returned `Shutdown` is triggered or dropped.
pub async fn spawn_server(config: LabConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let signal = shutdown.signalled();

    tokio::spawn(async move {
        let _ = server.run(listener, signal).await;
    });

    (addr, shutdown)
}
