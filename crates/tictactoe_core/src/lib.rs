//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything that decides the game and nothing that
//! touches a terminal or a disk:
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win/draw checks in [`rules`]
//! - **Engine**: [`GameEngine`], the turn/state machine reporting a
//!   [`PlaceOutcome`] per placement
//! - **Statistics**: the [`Statistics`] value and the [`StatisticsStore`]
//!   boundary it is loaded from and saved to
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, PlaceOutcome, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.place_mark(Position::TopLeft).unwrap();
//! engine.place_mark(Position::Center).unwrap();
//! engine.place_mark(Position::TopCenter).unwrap();
//! engine.place_mark(Position::BottomLeft).unwrap();
//! let outcome = engine.place_mark(Position::TopRight).unwrap();
//! assert_eq!(outcome, PlaceOutcome::Win(Player::X));
//! assert!(!engine.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod stats;
mod store;
mod types;

pub use action::MoveError;
pub use engine::{GameEngine, GameStatus, Outcome, PlaceOutcome};
pub use position::{Position, PositionError};
pub use stats::{DRAWS_KEY, PLAYER_O_WINS_KEY, PLAYER_X_WINS_KEY, Statistics};
pub use store::{MemoryStore, StatisticsStore, StoreError};
pub use types::{Board, Player, Square};
