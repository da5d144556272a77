//! cooltown-gateway - Gateway Orchestrator microservice
//!
//! **Module Identity:**
//! - Name: cooltown-gateway (Gateway Orchestrator)
//! - Default port: 3002
//!
//! Accepts a client audio fragment, has cooltown-search recognize it and
//! returns the matching track payload from cooltown-tracks.

use anyhow::{Context, Result};
use clap::Parser;
use cooltown_common::config::load_toml_config;
use cooltown_common::logging::init_tracing;
use tracing::info;

use cooltown_gateway::config::{Args, GatewayConfig};
use cooltown_gateway::{build_router, AppState, IdentifyPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_toml_config(args.config.as_deref())?;
    init_tracing(&loaded.toml.logging)?;

    info!(
        "Starting cooltown-gateway (Gateway Orchestrator) v{}",
        env!("CARGO_PKG_VERSION")
    );
    loaded.log_source();

    let config = GatewayConfig::resolve(&args, &loaded.toml);
    info!("Recognition broker: {}", config.upstream.search_url);
    info!("Track store: {}", config.upstream.tracks_url);

    let pipeline = IdentifyPipeline::from_config(&config.upstream)
        .context("Failed to build upstream HTTP client")?;
    let app = build_router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
