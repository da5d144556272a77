//! Configuration resolution for cooltown-tracks
//!
//! **Priority:** CLI → ENV → TOML `[tracks]` → compiled default

use clap::Parser;
use cooltown_common::config::{default_data_dir, resolve_setting, TomlConfig};
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Command-line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cooltown-tracks", version, about = "Cooltown track store")]
pub struct Args {
    /// Path to config.toml
    #[arg(long, env = "COOLTOWN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address (host:port)
    #[arg(long, env = "COOLTOWN_TRACKS_BIND")]
    pub bind: Option<String>,

    /// SQLite database file
    #[arg(long, env = "COOLTOWN_TRACKS_DB")]
    pub database: Option<PathBuf>,
}

/// Resolved track store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracksConfig {
    pub bind: String,
    pub database_path: PathBuf,
}

impl TracksConfig {
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Self {
        Self {
            bind: resolve_setting(args.bind.clone(), toml.tracks.bind.clone(), || {
                DEFAULT_BIND.to_string()
            }),
            database_path: resolve_setting(
                args.database.clone(),
                toml.tracks.database_path.clone(),
                || default_data_dir().join("tracks.db"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = TracksConfig::resolve(&Args::default(), &TomlConfig::default());
        assert_eq!(config.bind, DEFAULT_BIND);
        assert!(config.database_path.ends_with("tracks.db"));
    }

    #[test]
    fn test_cli_beats_toml() {
        let mut toml = TomlConfig::default();
        toml.tracks.bind = Some("0.0.0.0:4000".to_string());
        toml.tracks.database_path = Some(PathBuf::from("/srv/toml.db"));

        let args = Args {
            database: Some(PathBuf::from("/srv/cli.db")),
            ..Args::default()
        };

        let config = TracksConfig::resolve(&args, &toml);
        assert_eq!(config.bind, "0.0.0.0:4000");
        assert_eq!(config.database_path, PathBuf::from("/srv/cli.db"));
    }
}
