use std::sync::Arc;

use anyhow::Context;
use plant_chatbot::{
    config::{Config, DEFAULT_LOG_FILTER},
    routes::create_router,
    services::database::{DatabaseHandle, spawn_connect},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().context("failed to read configuration")?;
    let mongo_uri = config
        .redacted_mongo_uri()
        .unwrap_or_else(|| "<unset>".to_string());
    tracing::info!(port = config.port, %mongo_uri, "🔍 Loaded configuration");

    // Races with the listener below; no route waits for it.
    let database = DatabaseHandle::new();
    spawn_connect(database.clone(), config.mongo_uri.clone());

    let state = Arc::new(AppState::new(database));
    let app = create_router().with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 Server running at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
