//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the configured app
//! - Wire up middleware (request ID, tracing, timeout, limits, CORS, metrics)
//! - Serve on a plain TCP listener or over TLS
//! - Drain in-flight requests on shutdown

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{body::Body, middleware, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::apps;
use crate::config::LabConfig;
use crate::http::{request, response};
use crate::observability::{metrics, tracing::make_request_span};

/// HTTP server for one demo app.
pub struct HttpServer {
    router: Router,
    config: LabConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LabConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the app router wrapped in the shared middleware stack.
    #[allow(deprecated)]
    fn build_router(config: &LabConfig) -> Router {
        let app_name = config.app.app_name();

        let mut router = apps::router(config)
            .layer(middleware::from_fn_with_state(app_name, metrics::track_requests));

        if config.cors_enabled() {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router.layer(
            ServiceBuilder::new()
                .layer(request::set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                .layer(request::propagate_request_id_layer())
                .layer(response::served_by_layer(app_name))
                .layer(RequestBodyLimitLayer::new(config.http.max_body_size))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve plain HTTP until `shutdown` resolves, then drain.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, app = %self.config.app, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received, draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS until `shutdown` resolves, then drain for at most
    /// `timeouts.shutdown_grace_secs`.
    pub async fn run_tls<F>(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(address = %addr, app = %self.config.app, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        let signal_handle = handle.clone();
        tokio::spawn(async move {
            shutdown.await;
            tracing::info!(grace_secs = grace.as_secs(), "Shutdown signal received, draining");
            signal_handle.graceful_shutdown(Some(grace));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
