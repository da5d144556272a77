//! Configuration resolution for cooltown-gateway
//!
//! **Priority:** CLI → ENV → TOML `[gateway]` → compiled default

use clap::Parser;
use cooltown_common::config::{resolve_setting, TomlConfig};
use std::path::PathBuf;

use crate::pipeline::UpstreamConfig;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3002";
/// Default recognition broker location
pub const DEFAULT_SEARCH_URL: &str = "http://127.0.0.1:3001";
/// Default track store location
pub const DEFAULT_TRACKS_URL: &str = "http://127.0.0.1:3000";

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cooltown-gateway", version, about = "Cooltown identify gateway")]
pub struct Args {
    /// Path to config.toml
    #[arg(long, env = "COOLTOWN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address (host:port)
    #[arg(long, env = "COOLTOWN_GATEWAY_BIND")]
    pub bind: Option<String>,

    /// Base URL of the recognition broker
    #[arg(long, env = "COOLTOWN_SEARCH_URL")]
    pub search_url: Option<String>,

    /// Base URL of the track store
    #[arg(long, env = "COOLTOWN_TRACKS_URL")]
    pub tracks_url: Option<String>,
}

/// Resolved gateway settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind: String,
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Self {
        let section = &toml.gateway;
        Self {
            bind: resolve_setting(args.bind.clone(), section.bind.clone(), || {
                DEFAULT_BIND.to_string()
            }),
            upstream: UpstreamConfig {
                search_url: resolve_setting(
                    args.search_url.clone(),
                    section.search_url.clone(),
                    || DEFAULT_SEARCH_URL.to_string(),
                ),
                tracks_url: resolve_setting(
                    args.tracks_url.clone(),
                    section.tracks_url.clone(),
                    || DEFAULT_TRACKS_URL.to_string(),
                ),
            },
        }
    }
}
