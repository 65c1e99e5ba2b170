//! Terminal tic-tac-toe with persistent statistics.
//!
//! # Architecture
//!
//! - **Engine**: pure game logic from [`tictactoe_core`]
//! - **Store**: [`TomlFileStore`] keeps the win/draw counters on disk
//! - **Session**: [`GameSession`] wires one engine to one store
//! - **Presentation**: [`tui`] renders the 3x3 button grid and routes
//!   clicks and keys to the session
//!
//! # Example
//!
//! ```
//! use tictactoe::GameSession;
//! use tictactoe_core::{MemoryStore, Position};
//!
//! let mut session = GameSession::start(MemoryStore::new());
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     session.select_cell(pos);
//! }
//! assert_eq!(session.message(), "Player X wins!");
//! assert_eq!(*session.statistics().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bindings;
mod cli;
mod config;
mod file_store;
mod session;
pub mod tui;

pub use bindings::{BindingError, CellBindings, RESERVED_KEYS};
pub use cli::{Cli, Command, PlayArgs, StatsArgs};
pub use config::{AppConfig, ConfigError};
pub use file_store::TomlFileStore;
pub use session::GameSession;
