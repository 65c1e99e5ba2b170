//! The game state engine: board, active player, and active/terminal status.

use super::action::MoveError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and accepts placements.
    Active,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Terminal result of a game, as recorded in the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// What the engine reports after an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// No line and free cells remain; `next` is now to move.
    Continue {
        /// The player whose turn it is now.
        next: Player,
    },
    /// The placing player completed a line.
    Win(Player),
    /// The board filled up with no line.
    Draw,
}

impl PlaceOutcome {
    /// The terminal outcome, if this placement ended the game.
    pub fn terminal(&self) -> Option<Outcome> {
        match self {
            PlaceOutcome::Continue { .. } => None,
            PlaceOutcome::Win(player) => Some(Outcome::Win(*player)),
            PlaceOutcome::Draw => Some(Outcome::Draw),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// States: `Active(X)`, `Active(O)`, `Won(p)`, `Draw`. A new or reset
/// engine is `Active(X)`. Terminal states accept only [`GameEngine::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) status: GameStatus,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::Active,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next placement uses.
    ///
    /// After a win this is still the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether placements are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Number of successful placements since the last reset.
    pub fn turn_count(&self) -> usize {
        self.board.filled()
    }

    /// Empty positions, in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the active player's mark at `pos`.
    ///
    /// After placing, checks for a win by the active player, then for a
    /// draw, and otherwise passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is in a terminal state.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    ///
    /// Neither error changes the board or the active player.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.active_player))]
    pub fn place_mark(&mut self, pos: Position) -> Result<PlaceOutcome, MoveError> {
        if !self.is_active() {
            debug!(status = ?self.status, "Placement rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Placement rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.active_player;
        self.board.set(pos, Square::Occupied(player));
        debug!(turn = self.turn_count(), "Mark placed");

        let outcome = if self.check_win() {
            self.status = GameStatus::Won(player);
            info!(winner = %player, "Game won");
            PlaceOutcome::Win(player)
        } else if self.check_draw() {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            PlaceOutcome::Draw
        } else {
            self.active_player = player.opponent();
            PlaceOutcome::Continue {
                next: self.active_player,
            }
        };

        self.debug_check_invariants();
        Ok(outcome)
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index of 9 or more, otherwise as
    /// [`GameEngine::place_mark`].
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Result<PlaceOutcome, MoveError> {
        let pos = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        self.place_mark(pos)
    }

    /// True iff any row, column, or diagonal holds three equal marks.
    pub fn check_win(&self) -> bool {
        rules::winning_line(&self.board).is_some()
    }

    /// The player owning the winning line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// True iff every cell is occupied.
    ///
    /// Only meaningful as a draw when [`GameEngine::check_win`] is false.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Clears the board and starts a fresh game with X to move.
    #[instrument(skip(self), fields(status = ?self.status, turns = self.turn_count()))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = Player::X;
        self.status = GameStatus::Active;
        info!("Game reset");
    }

    fn debug_check_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Engine invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, indices: &[usize]) -> Vec<PlaceOutcome> {
        indices
            .iter()
            .map(|&i| engine.place_index(i).expect("legal move"))
            .collect()
    }

    #[test]
    fn test_new_engine_is_active_x() {
        let engine = GameEngine::new();
        assert!(engine.is_active());
        assert_eq!(engine.active_player(), Player::X);
        assert_eq!(engine.turn_count(), 0);
    }

    #[test]
    fn test_continue_toggles_player() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.place_mark(Position::Center),
            Ok(PlaceOutcome::Continue { next: Player::O })
        );
        assert_eq!(engine.active_player(), Player::O);
        assert_eq!(
            engine.place_mark(Position::TopLeft),
            Ok(PlaceOutcome::Continue { next: Player::X })
        );
        assert_eq!(
            engine.board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_top_row_win() {
        let mut engine = GameEngine::new();
        // X: 0, 1, 2  O: 3, 4
        let outcomes = play(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(outcomes.last(), Some(&PlaceOutcome::Win(Player::X)));
        assert!(!engine.is_active());
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert_eq!(engine.active_player(), Player::X);
        assert_eq!(
            engine.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_o_can_win() {
        let mut engine = GameEngine::new();
        // X: 0, 1, 8  O: 2, 4, 6
        let outcomes = play(&mut engine, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(outcomes.last(), Some(&PlaceOutcome::Win(Player::O)));
        assert_eq!(engine.winner(), Some(Player::O));
    }

    #[test]
    fn test_draw_on_ninth_placement() {
        let mut engine = GameEngine::new();
        // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
        let outcomes = play(&mut engine, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert!(
            outcomes[..8]
                .iter()
                .all(|o| matches!(o, PlaceOutcome::Continue { .. }))
        );
        assert_eq!(outcomes[8], PlaceOutcome::Draw);
        assert_eq!(engine.status(), GameStatus::Draw);
        assert!(engine.check_draw());
        assert!(!engine.check_win());
    }

    #[test]
    fn test_win_on_last_cell_is_win_not_draw() {
        let mut engine = GameEngine::new();
        // X completes the 2-4-6 diagonal with the ninth mark
        let outcomes = play(&mut engine, &[0, 1, 2, 3, 5, 8, 4, 7, 6]);
        assert_eq!(outcomes[8], PlaceOutcome::Win(Player::X));
        assert!(engine.check_draw());
    }

    #[test]
    fn test_occupied_square_changes_nothing() {
        let mut engine = GameEngine::new();
        engine.place_mark(Position::Center).unwrap();
        let before = engine.clone();
        assert_eq!(
            engine.place_mark(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_inactive_game_changes_nothing() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        let before = engine.clone();
        assert_eq!(
            engine.place_mark(Position::BottomRight),
            Err(MoveError::GameOver)
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.place_index(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset();
        assert_eq!(engine, GameEngine::new());

        play(&mut engine, &[4]);
        engine.reset();
        assert_eq!(engine.active_player(), Player::X);
        assert!(engine.is_active());
        assert_eq!(engine.turn_count(), 0);
    }

    #[test]
    fn test_turn_count_tracks_placements() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0, 8]);
        let _ = engine.place_mark(Position::Center);
        assert_eq!(engine.turn_count(), 3);
        assert_eq!(engine.valid_moves().len(), 6);
    }
}
