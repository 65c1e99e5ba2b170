//! Explicit cell-index to board-position hotkey mapping.
//!
//! Entry `i` of the configured key list binds cell index `i`, which is
//! [`Position::from_index`]`(i)`. Each entry is validated on its own; a bad
//! entry is logged and skipped and the remaining cells keep their keys.

use derive_more::Display;
use tictactoe_core::Position;
use tracing::{error, info, instrument};

/// Keys handled by the game itself; they cannot be bound to a cell.
///
/// Space activates the cursor cell, `q` quits, `r` starts a new game and
/// `s` resets the statistics.
pub const RESERVED_KEYS: [char; 4] = [' ', 'q', 'r', 's'];

/// A configured cell key that could not be bound.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BindingError {
    /// No key was configured for the cell.
    #[display("Cell {} ({}) has no key assigned", index, position)]
    Missing {
        /// Cell index.
        index: usize,
        /// Cell position.
        position: Position,
    },
    /// The entry is not exactly one character.
    #[display("Cell {} key {:?} must be a single character", index, value)]
    NotSingleChar {
        /// Cell index.
        index: usize,
        /// Configured value.
        value: String,
    },
    /// The key is used by a game command.
    #[display("Cell {} key '{}' is reserved", index, key)]
    Reserved {
        /// Cell index.
        index: usize,
        /// Configured key.
        key: char,
    },
    /// The key is already bound to an earlier cell.
    #[display("Cell {} key '{}' is already bound to cell {}", index, key, first)]
    Duplicate {
        /// Cell index.
        index: usize,
        /// Configured key.
        key: char,
        /// Cell that keeps the key.
        first: usize,
    },
    /// More than 9 entries were configured.
    #[display("Entry {} ({:?}) has no cell to bind", index, value)]
    Extra {
        /// Entry index.
        index: usize,
        /// Configured value.
        value: String,
    },
}

impl std::error::Error for BindingError {}

/// Validated per-cell hotkeys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBindings {
    keys: [Option<char>; 9],
    problems: Vec<BindingError>,
}

impl CellBindings {
    /// Builds bindings from the configured key list.
    ///
    /// Problems are logged at `error` and the offending entry is skipped.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn from_keys(entries: &[String]) -> Self {
        let mut keys = [None; 9];
        let mut problems = Vec::new();

        for (index, value) in entries.iter().enumerate() {
            if index >= keys.len() {
                problems.push(BindingError::Extra {
                    index,
                    value: value.clone(),
                });
                continue;
            }

            let mut chars = value.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_lowercase(),
                _ => {
                    problems.push(BindingError::NotSingleChar {
                        index,
                        value: value.clone(),
                    });
                    continue;
                }
            };

            if RESERVED_KEYS.contains(&key) {
                problems.push(BindingError::Reserved { index, key });
                continue;
            }

            if let Some(first) = keys.iter().position(|k| *k == Some(key)) {
                problems.push(BindingError::Duplicate { index, key, first });
                continue;
            }

            keys[index] = Some(key);
        }

        for (index, position) in Position::ALL.iter().enumerate().skip(entries.len()) {
            problems.push(BindingError::Missing {
                index,
                position: *position,
            });
        }

        for problem in &problems {
            error!(%problem, "Cell binding skipped");
        }
        info!(
            bound = keys.iter().filter(|k| k.is_some()).count(),
            skipped = problems.len(),
            "Cell bindings ready"
        );

        Self { keys, problems }
    }

    /// The cell bound to `key`, if any. Matching ignores ASCII case.
    pub fn position_for(&self, key: char) -> Option<Position> {
        let key = key.to_ascii_lowercase();
        self.keys
            .iter()
            .position(|k| *k == Some(key))
            .and_then(Position::from_index)
    }

    /// The key bound to `position`, if any.
    pub fn key_for(&self, position: Position) -> Option<char> {
        self.keys[position.to_index()]
    }

    /// Entries that were skipped.
    pub fn problems(&self) -> &[BindingError] {
        &self.problems
    }

    /// Whether all nine cells have a key.
    pub fn is_complete(&self) -> bool {
        self.keys.iter().all(Option::is_some)
    }
}

impl Default for CellBindings {
    fn default() -> Self {
        let keys: Vec<String> = (1..=9).map(|n| n.to_string()).collect();
        Self::from_keys(&keys)
    }
}
