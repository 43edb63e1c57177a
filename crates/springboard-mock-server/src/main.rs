//! Springboard mock server entry point.

use anyhow::Context;
use clap::Parser;
use springboard_mock_server::config::ServerArgs;
use springboard_mock_server::{create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
    {
        eprintln!("Warning: tracing init failed: {}", e);
    }

    let config = ServerArgs::parse().into_config();
    let state = AppState::new(config.store(), config.profile.clone());
    let app = create_router(state);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %config.addr,
        profile = %config.profile_kind,
        cards = config.seed.len(),
        "Springboard mock API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
