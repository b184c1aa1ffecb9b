//! Demo backend server.
//!
//! Serves one of the demo apps (crud, redirect, routes, tls) so a reverse
//! proxy or load balancer has something realistic to route to.
//!
//! ```text
//! lab-backends --app crud                       # 0.0.0.0:8002, seeded store
//! lab-backends --config lab.toml --bind 127.0.0.1:9000
//! ```

use std::path::PathBuf;

use clap::Parser;

use lab_backends::apps::AppKind;
use lab_backends::config::{load_config, validate_config, ConfigError, LabConfig};
use lab_backends::http::HttpServer;
use lab_backends::lifecycle::{signals, Shutdown};
use lab_backends::net;
use lab_backends::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "lab-backends")]
#[command(about = "Demo HTTP backends for reverse proxy and load balancer labs", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// App to serve, overriding the config file.
    #[arg(short, long, value_enum)]
    app: Option<AppKind>,

    /// Bind address, overriding the config file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LabConfig::default(),
    };
    if let Some(app) = cli.app {
        config.app = app;
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = Some(bind);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!(
        app = %config.app,
        bind_address = %config.bind_address(),
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = net::parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signalled();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let tls = config.listener.tls.clone();
    let bind_address = config.bind_address();
    let server = HttpServer::new(config);

    match tls {
        Some(tls) => {
            let rustls = net::tls::load_tls_config(&tls).await?;
            let addr = net::parse_addr(&bind_address)?;
            server.run_tls(addr, rustls, server_shutdown).await?;
        }
        None => {
            let listener = net::bind(&bind_address).await?;
            server.run(listener, server_shutdown).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
