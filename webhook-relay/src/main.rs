//! Webhook Relay server.
//!
//! Serves a single endpoint, `/dl`:
//! - `POST` looks up `code` in the mapping file and forwards `message` to the
//!   registered webhook
//! - `GET` returns the mapping file as JSON
//!
//! The mapping file is re-read on every request.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use webhook_relay::{router, AppState, Config, Dispatcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        webhook_map_path = %config.webhook_map_path.display(),
        delivery_timeout_ms = config.delivery_timeout_ms(),
        "config_loaded"
    );

    // Shared HTTP client for all deliveries
    let client = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let dispatcher = Dispatcher::new(client, config.delivery_timeout);
    let port = config.port;
    let app = router(AppState::new(config, dispatcher));

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("relay_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_server_shutting_down");
}
