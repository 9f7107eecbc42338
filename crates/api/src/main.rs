use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use persistence::FileStore;

mod app;
mod config;
mod error;
mod jobs;
mod middleware;
mod routes;
mod services;

use jobs::{JobScheduler, SweepStalePostingsJob};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Arc::new(config::Config::load()?);

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics();

    info!("Starting ERP21 careers API v{}", env!("CARGO_PKG_VERSION"));

    if config.security.admin_password.is_empty() {
        warn!("No admin password configured; admin login is disabled");
    }

    // Open the job store
    let store = Arc::new(FileStore::new(
        &config.storage.data_dir,
        config.storage.bootstrap_path(),
    ));

    let state = app::AppState::new(config.clone(), store);

    // Background jobs
    let mut scheduler = JobScheduler::new();
    if config.catalog.sweep_enabled {
        scheduler.register(SweepStalePostingsJob::new(
            state.lifecycle.clone(),
            config.catalog.stale_after_days,
        ));
    }
    scheduler.start();

    // Build application
    let app = app::create_app(state);

    // Start server
    let addr = config.socket_addr()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(5)).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
    }
}
