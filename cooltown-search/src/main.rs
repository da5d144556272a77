//! cooltown-search - Recognition Broker microservice
//!
//! **Module Identity:**
//! - Name: cooltown-search (Recognition Broker)
//! - Default port: 3001
//!
//! Forwards audio fragments to the audd.io recognition API and answers with
//! the recognized title.

use anyhow::{Context, Result};
use clap::Parser;
use cooltown_common::config::load_toml_config;
use cooltown_common::logging::init_tracing;
use tracing::info;

use cooltown_search::config::{Args, SearchConfig};
use cooltown_search::services::RecognitionClient;
use cooltown_search::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_toml_config(args.config.as_deref())?;
    init_tracing(&loaded.toml.logging)?;

    info!(
        "Starting cooltown-search (Recognition Broker) v{}",
        env!("CARGO_PKG_VERSION")
    );
    loaded.log_source();

    let config = SearchConfig::resolve(&args, &loaded.toml)?;
    info!("Recognition API: {}", config.recognition.api_url);

    let recognizer = RecognitionClient::new(config.recognition.clone())?;
    let app = build_router(AppState::new(recognizer));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
