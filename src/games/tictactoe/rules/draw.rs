//! Full-board detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a drawn position. Turn order and status
/// are unaffected; the view uses this only to annotate the position.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_position() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XOX OX. ...".parse().unwrap();
        assert!(!is_full(&board));
    }
}
