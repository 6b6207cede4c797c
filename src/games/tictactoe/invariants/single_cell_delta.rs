//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{Board, Game, Mark, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// The differing square goes from empty to the mark whose turn it was, so
/// marks alternate X, O, X, ... and nothing is ever erased.
pub struct SingleCellDeltaInvariant;

impl SingleCellDeltaInvariant {
    fn step_holds(from_index: usize, before: &Board, after: &Board) -> bool {
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);

        matches!(
            (changed.next(), changed.next()),
            (Some((Square::Empty, Square::Occupied(mark))), None)
                if *mark == Mark::for_move(from_index)
        )
    }
}

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| Self::step_holds(k, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4] {
            game.apply_move(cell).unwrap();
        }
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = Game::new();
        game.history.branch(0, "O........".parse().unwrap());
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_at_once_violates() {
        let mut game = Game::new();
        game.history.branch(0, "X...O....".parse().unwrap());
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();
        game.history.branch(1, "O........".parse().unwrap());
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}
