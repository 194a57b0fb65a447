//! # rntlyd — rntly daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`rntly.toml` plus `RNTLY_*` env vars)
//! - Initialize structured logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Build the axum router around the application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rntly_adapter_http_axum::router;
use rntly_adapter_http_axum::state::AppState;
use rntly_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteLeaseRepository, SqlitePropertyRepository,
    SqliteTenantRepository,
};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .with_context(|| format!("opening database {}", config.database_url()))?;
    let pool = db.pool().clone();

    // Repositories
    let properties = SqlitePropertyRepository::new(pool.clone());
    let tenants = SqliteTenantRepository::new(pool.clone());
    let leases = SqliteLeaseRepository::new(pool);

    // HTTP
    let state = AppState::from_repositories(properties, tenants, leases);
    let app = router::build(state, config.dashboard_dir());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "rntlyd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    tracing::info!("rntlyd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
