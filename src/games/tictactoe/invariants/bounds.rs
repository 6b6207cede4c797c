//! Structural invariants: the history starts empty and the cursor is on it.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<Game> for StartsEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

/// Invariant: the current move index points into the history.
pub struct CurrentInBoundsInvariant;

impl Invariant<Game> for CurrentInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move index is within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(StartsEmptyInvariant::holds(&game));
        assert!(CurrentInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut game = Game::new();
        game.current = 3;
        assert!(!CurrentInBoundsInvariant::holds(&game));
    }
}
