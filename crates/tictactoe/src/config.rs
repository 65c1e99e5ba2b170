//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game.
///
/// Every field has a default, so an empty or absent file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the statistics counters are persisted to.
    #[serde(default = "default_stats_path")]
    stats_path: PathBuf,

    /// File the play-mode log is written to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Hotkey for each cell, by cell index (entry 0 is the top-left cell).
    #[serde(default = "default_cell_keys")]
    cell_keys: Vec<String>,
}

fn default_stats_path() -> PathBuf {
    PathBuf::from("tictactoe_stats.toml")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_cell_keys() -> Vec<String> {
    (1..=9).map(|n| n.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stats_path: default_stats_path(),
            log_file: default_log_file(),
            cell_keys: default_cell_keys(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(stats_path = %config.stats_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is not valid.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the statistics file.
    pub fn with_stats_path(mut self, stats_path: PathBuf) -> Self {
        self.stats_path = stats_path;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {}", message)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
}

impl ConfigError {
    /// Creates a new config error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.stats_path(), &PathBuf::from("tictactoe_stats.toml"));
        assert_eq!(config.cell_keys().len(), 9);
        assert_eq!(config.cell_keys()[0], "1");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stats_path = \"/tmp/elsewhere.toml\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.stats_path(), &PathBuf::from("/tmp/elsewhere.toml"));
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(config.cell_keys(), &default_cell_keys());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cell_keys = 7").unwrap();
        let err = AppConfig::load_or_default(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_stats_path_override() {
        let config = AppConfig::default().with_stats_path(PathBuf::from("x.toml"));
        assert_eq!(config.stats_path(), &PathBuf::from("x.toml"));
    }
}
