//! Skylark HTTP Server Binary
//!
//! This is the main entry point for the operations REST API server.
//! It opens the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve the sheets described by backend/repository.toml
//! cargo run --bin skylark-server
//!
//! # Serve a workbook directory chosen through the environment
//! REPOSITORY_TYPE=workbook WORKBOOK_DIR=/srv/skylark/data cargo run --bin skylark-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)
//! - `REPOSITORY_CONFIG`: Path to a repository.toml (default: searched)
//! - `REPOSITORY_TYPE`, `WORKBOOK_DIR`: used when no repository.toml is found

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use skylark_ops::db::{FullRepository, RepositoryError, RepositoryFactory};
use skylark_ops::http::{create_router, AppState};

/// Pick the repository: explicit config file, then a repository.toml in a
/// standard location, then the environment.
fn open_repository() -> anyhow::Result<Arc<dyn FullRepository>> {
    if let Ok(path) = env::var("REPOSITORY_CONFIG") {
        info!("Loading repository configuration from {}", path);
        return RepositoryFactory::from_config_file(&path)
            .with_context(|| format!("Invalid repository configuration at {}", path));
    }

    match RepositoryFactory::from_default_config() {
        Ok(repo) => Ok(repo),
        Err(RepositoryError::ConfigurationError { message, .. })
            if message.starts_with("No repository.toml") =>
        {
            warn!("{}; falling back to environment", message);
            RepositoryFactory::from_env().context("Failed to create repository from environment")
        }
        Err(e) => Err(e).context("Invalid repository configuration"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Skylark HTTP Server");

    let repository = open_repository()?;
    if !repository.health_check().await.unwrap_or(false) {
        warn!("Repository health check failed; requests will report errors");
    }
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
