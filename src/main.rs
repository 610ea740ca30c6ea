mod api;
mod config;
mod error;
mod models;
mod services;

use crate::api::AppState;
use crate::config::Config;
use crate::services::{AssistantClient, PlaylistCatalog, QuoteBook};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,study_companion=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!(
        "API key configured: {}",
        if config.openrouter_api_key.is_some() { "YES" } else { "NO" }
    );

    let assistant = AssistantClient::new(&config)?;
    tracing::info!("Model: {}", assistant.model());
    if !assistant.is_configured() {
        tracing::warn!("OPENROUTER_API_KEY not set, /api/assistant will answer 500");
    }

    let playlists = PlaylistCatalog::new();
    tracing::info!("Loaded {} playlists", playlists.len());

    let quotes = QuoteBook::new();
    tracing::debug!("Loaded {} quotes", quotes.all().len());

    let app_state = Arc::new(AppState {
        assistant,
        playlists,
        quotes,
    });

    let app = api::app(app_state, &config);

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
