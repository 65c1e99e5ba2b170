//! Statistics persisted as a flat TOML table of named counters.

use std::path::{Path, PathBuf};
use tictactoe_core::{Statistics, StatisticsStore, StoreError};
use tracing::{debug, info, instrument};

/// File-backed [`StatisticsStore`].
///
/// The file holds the keys `PlayerXWins`, `PlayerOWins` and `Draws`. A
/// missing file or key reads as 0. Every save rewrites all three keys.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating TomlFileStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatisticsStore for TomlFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Statistics, StoreError> {
        if !self.path.exists() {
            info!("No statistics file yet, starting from zero");
            return Ok(Statistics::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::new(format!("Failed to read '{}': {}", self.path.display(), e))
        })?;
        let stats: Statistics = toml::from_str(&content).map_err(|e| {
            StoreError::new(format!("Failed to parse '{}': {}", self.path.display(), e))
        })?;

        info!(total_games = stats.total_games(), "Statistics loaded");
        Ok(stats)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::new(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string(stats)
            .map_err(|e| StoreError::new(format!("Failed to serialize statistics: {}", e)))?;

        // Replace the file in one rename.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content).map_err(|e| {
            StoreError::new(format!("Failed to write '{}': {}", tmp.display(), e))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            StoreError::new(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(?stats, "Statistics saved");
        Ok(())
    }
}
