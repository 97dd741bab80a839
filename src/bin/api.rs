use anyhow::Result;
use cafe_digest::{AppState, build_router, config::Config};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Arc::new(Config::from_env()?);
    info!(
        list_url = %config.cafe().list_url,
        feed_configured = config.feed_url().is_some(),
        "configuration loaded"
    );

    let state = AppState::new(config.clone())?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be killed.
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, initiating graceful shutdown...");
}
