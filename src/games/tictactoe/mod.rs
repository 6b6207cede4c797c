//! Tic-tac-toe with a branchable move history.

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, Move, MoveError, ReplayError, Step, StepError, StepParseError};
pub use contracts::{Contract, MoveContract, NotWon, SquareIsEmpty};
pub use game::{Game, GameView, MoveLabel, MoveLabels, Status};
pub use history::History;
pub use invariants::{
    CurrentInBoundsInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterWinInvariant, SingleCellDeltaInvariant, StartsEmptyInvariant,
};
pub use position::Position;
pub use types::{Board, BoardParseError, Mark, Square};
