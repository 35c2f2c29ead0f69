//! Wander Search: typed search over places, users and hazards
//!
//! This is the main entry point for the application.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wander_search::{
    config::Settings,
    providers::ProviderLoader,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting wander-search v{}", wander_search::VERSION);

    // Load configuration
    let settings = load_settings()?;
    settings.validate().context("invalid settings")?;
    info!(
        "Search timeout {}ms, page size {}",
        settings.search.timeout_ms, settings.search.page_size
    );

    // Load providers
    let registry = ProviderLoader::load(&settings)?;
    info!("Loaded {} search providers", registry.len());

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, registry);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("WANDER_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        settings.merge_env();
        return Ok(settings);
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/wander-search/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("wander-search/settings.yml"));
    }

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
