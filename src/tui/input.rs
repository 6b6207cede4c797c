//! Cursor and selection movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Rows skipped by PageUp / PageDown in the history list.
const PAGE: usize = 5;

/// Moves the board cursor one square; stops at the edges.
///
/// Arrow keys and vi-style `hjkl` are accepted. Any other key leaves the
/// cursor where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, col)),
        KeyCode::Left | KeyCode::Char('h') => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}

/// Moves the highlighted history row within `0..len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    let next = match key {
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => selected + 1,
        KeyCode::PageUp => selected.saturating_sub(PAGE),
        KeyCode::PageDown => selected + PAGE,
        _ => selected,
    };
    next.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('l')), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Left), Position::BottomLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_selection_clamped() {
        assert_eq!(move_selection(0, 4, KeyCode::Up), 0);
        assert_eq!(move_selection(3, 4, KeyCode::Down), 3);
        assert_eq!(move_selection(1, 4, KeyCode::PageDown), 3);
        assert_eq!(move_selection(3, 10, KeyCode::PageUp), 0);
        assert_eq!(move_selection(2, 4, KeyCode::Down), 3);
    }
}
