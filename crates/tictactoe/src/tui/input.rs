//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        let moves = [
            (KeyCode::Up, Position::TopCenter),
            (KeyCode::Down, Position::BottomCenter),
            (KeyCode::Left, Position::MiddleLeft),
            (KeyCode::Right, Position::MiddleRight),
        ];
        for (key, expected) in moves {
            assert_eq!(move_cursor(Position::Center, key), expected);
        }
    }

    #[test]
    fn test_stops_at_edges() {
        let blocked = [
            (Position::TopLeft, KeyCode::Up),
            (Position::TopLeft, KeyCode::Left),
            (Position::BottomRight, KeyCode::Down),
            (Position::BottomRight, KeyCode::Right),
            (Position::MiddleRight, KeyCode::Right),
        ];
        for (from, key) in blocked {
            assert_eq!(move_cursor(from, key), from, "{from:?} {key:?}");
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let center = Position::Center;
        assert_eq!(move_cursor(center, KeyCode::Enter), center);
    }
}
