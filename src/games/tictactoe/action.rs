//! First-class action types for tic-tac-toe.
//!
//! Moves and jumps are domain events: they carry intent, are validated
//! before anything changes, and are returned to the caller for logging or
//! display once accepted.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Reason a history jump was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move index is past the end of the history.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    InvalidIndex {
        /// Requested move index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// One scripted user action, as accepted by [`Game::replay`](super::Game::replay).
///
/// Parses from `"4"` (play cell 4) or `"@2"` (jump to move #2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Place the next mark at a cell index.
    Play(usize),
    /// Jump to a history index.
    Jump(usize),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Play(index) => write!(f, "{}", index),
            Step::Jump(index) => write!(f, "@{}", index),
        }
    }
}

/// Error parsing a [`Step`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid step {:?}: expected a cell index (0-8) or @<move>", input)]
pub struct StepParseError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for StepParseError {}

impl FromStr for Step {
    type Err = StepParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || StepParseError {
            input: s.to_string(),
        };
        match trimmed.strip_prefix('@') {
            Some(rest) => rest.parse().map(Step::Jump).map_err(|_| err()),
            None => trimmed.parse().map(Step::Play).map_err(|_| err()),
        }
    }
}

/// Error applying a scripted step.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum StepError {
    /// The step was a rejected move.
    #[display("{}", _0)]
    Move(MoveError),
    /// The step was a rejected jump.
    #[display("{}", _0)]
    Jump(JumpError),
}

impl std::error::Error for StepError {}

/// A replay stopped at a rejected step.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Step {} ({}) rejected: {}", number, step, error)]
pub struct ReplayError {
    /// 1-based number of the rejected step.
    pub number: usize,
    /// The rejected step.
    pub step: Step,
    /// Why it was rejected.
    pub error: StepError,
}

impl std::error::Error for ReplayError {}
