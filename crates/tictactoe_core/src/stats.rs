//! Win/loss/draw tallies carried across games.

use super::Outcome;
use super::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Persisted key for X's win count.
pub const PLAYER_X_WINS_KEY: &str = "PlayerXWins";
/// Persisted key for O's win count.
pub const PLAYER_O_WINS_KEY: &str = "PlayerOWins";
/// Persisted key for the draw count.
pub const DRAWS_KEY: &str = "Draws";

/// Counters for finished games.
///
/// Serializes as a flat map under the persisted key names; a missing key
/// deserializes as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(default)]
pub struct Statistics {
    /// Games won by X.
    #[serde(rename = "PlayerXWins")]
    x_wins: u32,
    /// Games won by O.
    #[serde(rename = "PlayerOWins")]
    o_wins: u32,
    /// Games that ended in a draw.
    #[serde(rename = "Draws")]
    draws: u32,
}

impl Statistics {
    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Win(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
        }
        info!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Outcome recorded"
        );
    }

    /// Zeroes all three counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total finished games.
    pub fn total_games(&self) -> u64 {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
    }

    /// The three-line summary shown to players.
    pub fn summary(&self) -> String {
        format!(
            "Player X Wins: {}\nPlayer O Wins: {}\nDraws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Win(Player::X));
        stats.record(Outcome::Win(Player::X));
        stats.record(Outcome::Win(Player::O));
        stats.record(Outcome::Draw);
        assert_eq!(stats, Statistics::new(2, 1, 1));
        assert_eq!(stats.total_games(), 4);
        assert_eq!(stats.wins(Player::X), 2);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut stats = Statistics::new(7, 3, 12);
        stats.reset();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_summary_format() {
        let stats = Statistics::new(3, 1, 2);
        assert_eq!(
            stats.summary(),
            "Player X Wins: 3\nPlayer O Wins: 1\nDraws: 2"
        );
        assert_eq!(stats.to_string(), stats.summary());
    }

    #[test]
    fn test_serializes_under_persisted_keys() {
        let json = serde_json::to_value(Statistics::new(1, 2, 3)).unwrap();
        assert_eq!(json[PLAYER_X_WINS_KEY], 1);
        assert_eq!(json[PLAYER_O_WINS_KEY], 2);
        assert_eq!(json[DRAWS_KEY], 3);
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let stats: Statistics = serde_json::from_str(r#"{"PlayerOWins": 4}"#).unwrap();
        assert_eq!(stats, Statistics::new(0, 4, 0));
    }
}
