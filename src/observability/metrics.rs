//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lab_requests_total` (counter): requests by app, method, status
//! - `lab_request_duration_seconds` (histogram): latency by app
//! - `lab_store_items` (gauge): rows currently held by the CRUD store
//!
//! Without an installed recorder every call here is a no-op, so handlers and
//! the store record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(app: &'static str, method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "lab_requests_total",
        "app" => app,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("lab_request_duration_seconds", "app" => app)
        .record(start.elapsed().as_secs_f64());
}

/// Record the current number of stored items.
pub fn record_store_size(len: usize) {
    metrics::gauge!("lab_store_items").set(len as f64);
}

/// Middleware recording every request against the serving app's name.
pub async fn track_requests(
    State(app): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    record_request(app, method.as_str(), response.status().as_u16(), start);
    response
}
