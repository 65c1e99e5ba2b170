//! Rejections raised when a placement is not allowed.

use super::Position;

/// Error that can occur when validating or applying a move.
///
/// A rejected move never changes the board or the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The raw cell index does not name a board position.
    #[display("Cell index {} is out of range (expected 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
