//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, spawns the click worker (and the optional
//! click simulator) and drives the Axum server until Ctrl-C.

use crate::config::Config;
use crate::domain::click_simulator::run_click_simulator;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store capped at `max_links`
/// - Background click worker
/// - Click simulator, when an interval is configured
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails or
/// the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryLinkRepository::new(config.max_links));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repository.clone()));
    tracing::info!("Click worker started");

    if let Some(interval) = config.click_simulation_interval() {
        tokio::spawn(run_click_simulator(
            repository.clone(),
            click_tx.clone(),
            interval,
        ));
        tracing::info!(?interval, "Click simulator started");
    }

    let state = AppState::new(repository, click_tx, config.link_settings());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
