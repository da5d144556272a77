//! Configuration resolution for cooltown-search
//!
//! **Priority:** CLI → ENV → TOML `[search]` → compiled default
//!
//! The recognition API token has no default; startup fails without one.

use clap::Parser;
use cooltown_common::config::{is_valid_key, resolve_setting, TomlConfig};
use cooltown_common::{Error, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::services::audd_client::AUDD_API_URL;
use crate::services::RecognitionConfig;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3001";

/// Environment variable carrying the recognition API token
pub const API_TOKEN_ENV_VAR: &str = "COOLTOWN_AUDD_API_TOKEN";

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cooltown-search", version, about = "Cooltown recognition broker")]
pub struct Args {
    /// Path to config.toml
    #[arg(long, env = "COOLTOWN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address (host:port)
    #[arg(long, env = "COOLTOWN_SEARCH_BIND")]
    pub bind: Option<String>,

    /// Recognition API endpoint
    #[arg(long, env = "COOLTOWN_AUDD_API_URL")]
    pub api_url: Option<String>,

    /// Recognition API token
    #[arg(long, env = "COOLTOWN_AUDD_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

/// Resolved recognition broker settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub bind: String,
    pub recognition: RecognitionConfig,
}

impl SearchConfig {
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Result<Self> {
        Ok(Self {
            bind: resolve_setting(args.bind.clone(), toml.search.bind.clone(), || {
                DEFAULT_BIND.to_string()
            }),
            recognition: RecognitionConfig {
                api_url: resolve_setting(args.api_url.clone(), toml.search.api_url.clone(), || {
                    AUDD_API_URL.to_string()
                }),
                api_token: resolve_api_token(args, toml)?,
            },
        })
    }
}

/// Resolve the recognition API token: CLI/ENV first, then TOML
fn resolve_api_token(args: &Args, toml: &TomlConfig) -> Result<String> {
    let cli_token = args.api_token.as_deref().filter(|key| is_valid_key(key));
    let toml_token = toml.search.api_token.as_deref().filter(|key| is_valid_key(key));

    if cli_token.is_some() && toml_token.is_some() {
        warn!("Recognition API token found in both environment/CLI and TOML. Using environment/CLI.");
    }

    if let Some(token) = cli_token {
        info!("Recognition API token loaded from environment/CLI");
        return Ok(token.to_string());
    }

    if let Some(token) = toml_token {
        info!("Recognition API token loaded from TOML config");
        return Ok(token.to_string());
    }

    Err(Error::Config(format!(
        "Recognition API token not configured. Please configure using one of:\n\
         1. Environment: {}=your-token\n\
         2. Command line: --api-token your-token\n\
         3. TOML config: [search] api_token = \"your-token\"",
        API_TOKEN_ENV_VAR
    )))
}
