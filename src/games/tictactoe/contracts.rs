//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Game, Position, rules};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the viewed board has no winner yet.
pub struct NotWon;

impl NotWon {
    /// Rejects moves on a won board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match rules::check_winner(game.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveError> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Contract for placing a mark on the viewed board.
///
/// Preconditions:
/// - the viewed board has no winner
/// - the square is empty
///
/// Postconditions:
/// - every history invariant holds
/// - the history was cut after the viewed snapshot and grew by one
/// - the view moved to the new last snapshot
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, position: &Position) -> Result<(), MoveError> {
        NotWon::check(game)?;
        SquareIsEmpty::check(*position, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len {
            return Err(MoveError::InvariantViolation(format!(
                "History length {} after move, expected {}",
                after.history().len(),
                expected_len
            )));
        }
        if !after.is_at_latest() {
            return Err(MoveError::InvariantViolation(
                "View did not advance to the new move".to_string(),
            ));
        }
        if after.history().snapshots()[..=before.current_move()]
            != before.history().snapshots()[..=before.current_move()]
        {
            return Err(MoveError::InvariantViolation(
                "Snapshots before the move were rewritten".to_string(),
            ));
        }
        Ok(())
    }
}
