//! A won position is always the last snapshot.

use super::super::{Game, rules};
use super::Invariant;

/// Invariant: no snapshot follows a snapshot that contains a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<Game> for NoMoveAfterWinInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();
        snapshots[..snapshots.len() - 1]
            .iter()
            .all(|board| rules::check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_game_holds() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell).unwrap();
        }
        assert!(NoMoveAfterWinInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell).unwrap();
        }
        game.history.branch(5, "XXX OOO ...".parse().unwrap());
        assert!(!NoMoveAfterWinInvariant::holds(&game));
    }
}
