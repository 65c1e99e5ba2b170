//! Turn consistency invariant: the active player matches the move count.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: while the game is active, X is to move exactly when an even
/// number of cells are filled.
///
/// Terminal games keep the last mover as active player and are exempt.
pub struct TurnConsistentInvariant;

impl Invariant<GameEngine> for TurnConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if !engine.is_active() {
            return true;
        }
        let expected = if engine.turn_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.active_player() == expected
    }

    fn description() -> &'static str {
        "Active player is X after an even number of placements, O after an odd number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Position, Square};

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = GameEngine::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            engine.place_mark(pos).unwrap();
            assert!(TurnConsistentInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_wrong_active_player_violates() {
        let mut engine = GameEngine::new();
        engine.active_player = Player::O;
        assert!(!TurnConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_terminal_game_exempt() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::X));
        engine.status = GameStatus::Won(Player::X);
        assert!(TurnConsistentInvariant::holds(&engine));
    }
}
