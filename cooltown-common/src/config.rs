//! Configuration file loading
//!
//! Each service resolves its settings in this order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (via clap `env`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error: the service logs a warning and
//! starts with defaults. A config file that exists but does not parse is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "COOLTOWN_CONFIG";

/// Shared TOML configuration (`config.toml`)
///
/// One file configures all three services; each reads its own section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub tracks: TracksSection,

    #[serde(default)]
    pub search: SearchSection,

    #[serde(default)]
    pub gateway: GatewaySection,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[tracks]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TracksSection {
    pub bind: Option<String>,
    pub database_path: Option<PathBuf>,
}

/// `[search]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSection {
    pub bind: Option<String>,
    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

/// `[gateway]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySection {
    pub bind: Option<String>,
    pub search_url: Option<String>,
    pub tracks_url: Option<String>,
}

/// Locate the config file to load, if any
///
/// An explicit path (CLI or `COOLTOWN_CONFIG`) is returned as-is; otherwise
/// `~/.config/cooltown/config.toml` then `/etc/cooltown/config.toml` are tried.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let user_config = dirs::config_dir().map(|d| d.join("cooltown").join("config.toml"));
    let system_config = PathBuf::from("/etc/cooltown/config.toml");

    user_config
        .into_iter()
        .chain(std::iter::once(system_config))
        .find(|path| path.exists())
}

/// TOML config plus the file it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub toml: TomlConfig,
    /// File that was parsed; `None` when running on defaults
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Report where configuration came from
    ///
    /// Called once tracing is up, since the config decides the log level.
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!("Loaded config from {}", path.display()),
            None => warn!("No config file found, using built-in defaults"),
        }
    }
}

/// Load the TOML config, falling back to defaults when no file exists
pub fn load_toml_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    match locate_config_file(explicit) {
        Some(path) if path.exists() => Ok(LoadedConfig {
            toml: parse_toml_file(&path)?,
            source: Some(path),
        }),
        _ => Ok(LoadedConfig::default()),
    }
}

/// Parse a TOML config file
pub fn parse_toml_file(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Pick the first configured value, falling back to a compiled default
pub fn resolve_setting<T>(cli_or_env: Option<T>, toml: Option<T>, default: impl FnOnce() -> T) -> T {
    cli_or_env.or(toml).unwrap_or_else(default)
}

/// Validate a credential (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Default data directory for the track database
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("cooltown"))
        .unwrap_or_else(|| PathBuf::from("./cooltown_data"))
}
