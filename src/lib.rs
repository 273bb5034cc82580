pub mod api;
pub mod config;
pub mod engine;
pub mod loader;
pub mod models;

use tracing_subscriber::EnvFilter;

use crate::api::{start_dashboard_server, ApiContext};
use crate::config::DashboardConfig;

/// Starts the dashboard backend and serves until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = DashboardConfig::from_env().map_err(|e| e.to_string())?;
    let bind_addr = config.bind_addr;
    tracing::info!(
        data_path = %config.data_path.display(),
        top_stores = config.top_stores,
        "Configuration loaded"
    );

    let mut server = start_dashboard_server(ApiContext::from_config(config), bind_addr).await?;
    tracing::info!(
        session_id = %server.session.session_id,
        addr = %server.session.server_addr,
        started_at = %server.session.started_at,
        "Dashboard session started"
    );

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    server.shutdown();
    server.wait().await;
    Ok(())
}
