//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_core::{BOARD_SIZE, Coord};

/// Moves cursor based on arrow keys. The cursor stops at the board's edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let last = BOARD_SIZE - 1;

    match key {
        KeyCode::Right if cursor.col < last => Coord::new(cursor.row, cursor.col + 1),
        KeyCode::Left if cursor.col > 0 => Coord::new(cursor.row, cursor.col - 1),
        KeyCode::Down if cursor.row < last => Coord::new(cursor.row + 1, cursor.col),
        KeyCode::Up if cursor.row > 0 => Coord::new(cursor.row - 1, cursor.col),
        // No change for other keys or edge cases
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Right), Coord::new(1, 2));
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Up), Coord::new(0, 1));
        assert_eq!(move_cursor(Coord::new(2, 1), KeyCode::Left), Coord::new(2, 0));
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Coord::new(0, 2), KeyCode::Right), Coord::new(0, 2));
        assert_eq!(move_cursor(Coord::new(0, 2), KeyCode::Up), Coord::new(0, 2));
        assert_eq!(move_cursor(Coord::new(2, 0), KeyCode::Down), Coord::new(2, 0));
        assert_eq!(move_cursor(Coord::new(2, 0), KeyCode::Char('x')), Coord::new(2, 0));
    }
}
