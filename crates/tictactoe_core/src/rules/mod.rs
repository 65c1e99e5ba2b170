//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
