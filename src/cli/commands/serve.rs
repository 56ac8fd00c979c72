use anyhow::Context;
use tokio::net::TcpListener;

use crate::config;
use crate::database::DatabaseManager;
use crate::routes;
use crate::state::AppState;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    if let Some(port) = port {
        config.api.port = port;
    }
    tracing::info!("Starting Employee Management API in {:?} mode", config.environment);

    let storage = DatabaseManager::storage(&config.database)
        .await
        .context("failed to initialise storage")?;
    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let state = AppState::new(config, storage).context("failed to initialise JWT signing")?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Employee Management API listening on http://{}", bind_addr);

    axum::serve(listener, routes::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
