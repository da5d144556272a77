//! cooltown-tracks - Track Store microservice
//!
//! **Module Identity:**
//! - Name: cooltown-tracks (Track Store)
//! - Default port: 3000
//!
//! Persists audio payloads keyed by track id and serves them to the gateway.

use anyhow::{Context, Result};
use clap::Parser;
use cooltown_common::config::load_toml_config;
use cooltown_common::logging::init_tracing;
use tracing::{error, info};

use cooltown_tracks::config::{Args, TracksConfig};
use cooltown_tracks::{build_router, AppState, TrackRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_toml_config(args.config.as_deref())?;
    init_tracing(&loaded.toml.logging)?;

    info!(
        "Starting cooltown-tracks (Track Store) v{}",
        env!("CARGO_PKG_VERSION")
    );
    loaded.log_source();

    let config = TracksConfig::resolve(&args, &loaded.toml);
    info!("Database: {}", config.database_path.display());

    let pool = match cooltown_tracks::db::init_database_pool(&config.database_path).await {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            error!("Failed to open track database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(TrackRepository::new(pool));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
