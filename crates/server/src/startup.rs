//! Server startup: config loading, point store initialization and serving.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use proximity_core::Config;
use proximity_store::PointStore;

use crate::router::build_router;
use crate::state::AppState;

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> Config {
    proximity_core::config::load_dotenv();
    Config::from_env()
}

fn load_store(config: &Config) -> anyhow::Result<PointStore> {
    let path = &config.storage.points_file;
    PointStore::load(path).with_context(|| format!("cannot load points from {}", path.display()))
}

/// Load the points file and start serving. Returns once a shutdown signal
/// has been received and in-flight requests have drained.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    config.log_summary();

    let store = load_store(config)?;
    let state = Arc::new(AppState::new(store));
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Validate the points file without serving.
pub fn check(config: &Config) -> anyhow::Result<()> {
    let store = load_store(config)?;
    match store.bounds() {
        Some(b) => info!("{} points, bounds {} .. {}", store.len(), b.min, b.max),
        None => info!("points file is valid but empty"),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
