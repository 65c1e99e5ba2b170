//! Mark balance invariant: X has as many marks as O, or one more.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and turns alternate, so O can never be ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
