//! The boundary statistics are loaded from and saved to.

use super::stats::{DRAWS_KEY, PLAYER_O_WINS_KEY, PLAYER_X_WINS_KEY, Statistics};
use derive_more::{Display, Error};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Statistics store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Persistence for the three statistics counters.
///
/// `load` is called once at startup; `save` after every change, with all
/// three counters written together.
pub trait StatisticsStore {
    /// Reads the counters, treating absent ones as 0.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage exists but cannot be read.
    fn load(&self) -> Result<Statistics, StoreError>;

    /// Writes all three counters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}

/// In-process store keeping the counters under their persisted key names.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `stats`.
    pub fn with_statistics(stats: &Statistics) -> Self {
        let mut store = Self::new();
        store.write(stats);
        store
    }

    /// Raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn write(&mut self, stats: &Statistics) {
        for (key, value) in [
            (PLAYER_X_WINS_KEY, *stats.x_wins()),
            (PLAYER_O_WINS_KEY, *stats.o_wins()),
            (DRAWS_KEY, *stats.draws()),
        ] {
            self.values.insert(key.to_string(), value);
        }
    }
}

impl StatisticsStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Statistics, StoreError> {
        let value = |key: &str| self.get(key).unwrap_or(0);
        let stats = Statistics::new(
            value(PLAYER_X_WINS_KEY),
            value(PLAYER_O_WINS_KEY),
            value(DRAWS_KEY),
        );
        debug!(?stats, "Statistics loaded from memory");
        Ok(stats)
    }

    #[instrument(skip(self))]
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.write(stats);
        self.saves += 1;
        debug!(saves = self.saves, "Statistics saved to memory");
        Ok(())
    }
}
