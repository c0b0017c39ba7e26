pub mod aggregate;
pub mod api;
pub mod core;
pub mod providers;

use crate::aggregate::SearchEngine;
use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

pub const DEFAULT_PORT: u16 = 3000;

pub async fn run(config_path: Option<&str>, port: u16) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    serve(config, port).await
}

/// Builds the provider registry from `config` and serves the search API until
/// the process is interrupted.
pub async fn serve(config: AppConfig, port: u16) -> Result<()> {
    let engine = SearchEngine::from_config(&config)?;
    info!(
        "Registered {} providers: {:?}",
        engine.registry().len(),
        engine.registry()
    );

    let app = api::router(api::AppState::new(engine));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
