//! Game state: the snapshot history and the viewed move.

use super::action::{JumpError, Move, MoveError, ReplayError, Step, StepError};
use super::contracts::{Contract, MoveContract};
use super::history::History;
use super::{Board, Mark, Position, Square, rules};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe with a browsable, branchable history.
///
/// The game is a list of board snapshots plus the index of the snapshot on
/// screen. Whose turn it is follows from that index alone: X when it is
/// even, O when it is odd. Playing from an earlier snapshot discards every
/// later one before the new snapshot is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) current: usize,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Builds a game by applying steps in order.
    ///
    /// Stops at the first rejected step.
    #[instrument(skip(steps), fields(count = steps.len()))]
    pub fn replay(steps: &[Step]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (i, step) in steps.iter().enumerate() {
            game.apply_step(*step).map_err(|error| ReplayError {
                number: i + 1,
                step: *step,
                error,
            })?;
        }
        Ok(game)
    }

    /// Applies one scripted step.
    pub fn apply_step(&mut self, step: Step) -> Result<(), StepError> {
        match step {
            Step::Play(index) => self.apply_move(index).map(|_| ())?,
            Step::Jump(index) => self.jump_to(index)?,
        }
        Ok(())
    }

    /// Places the next mark at `index` (0-8) on the viewed board.
    ///
    /// Any snapshots after the viewed one are discarded first. Rejected moves
    /// leave the game untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::GameOver`] if the viewed board already has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if let Err(e) = MoveContract::pre(self, &position) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.to_move();
        let mut next = self.current_board().clone();
        next.set(position, Square::Occupied(mark));
        self.history.branch(self.current, next);
        self.current = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        let action = Move::new(mark, position);
        info!(%action, move_number = self.current, "Move applied");
        Ok(action)
    }

    /// Views snapshot `index` without touching the history.
    ///
    /// # Errors
    ///
    /// [`JumpError::InvalidIndex`] if `index` is past the last snapshot.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if index >= len {
            debug!(len, "Jump rejected");
            return Err(JumpError::InvalidIndex { index, len });
        }
        if index != self.current {
            info!(from = self.current, to = index, "Jumped");
            self.current = index;
        }
        Ok(())
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// One jump label per snapshot, oldest first.
    ///
    /// The iterator is lazy and `Clone`; clone it or call this again to walk
    /// the labels more than once.
    pub fn move_labels(&self) -> MoveLabels {
        MoveLabels {
            range: 0..self.history.len(),
        }
    }

    /// Everything a view needs to render the game.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.current_board().clone(),
            status: self.status(),
            current_move: self.current,
            moves: self.move_labels().collect(),
        }
    }

    /// The viewed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Index of the viewed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// All snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mark that plays next from the viewed board.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.current)
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self.current_board())
    }

    /// Empty squares on the viewed board; none once it is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Whether the viewed snapshot is the most recent one.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.history.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Status {
    /// The board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; this mark plays next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Jump target for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct MoveLabel {
    /// History index to jump to.
    index: usize,
    /// `game start` or `move #<n>`.
    description: String,
}

impl MoveLabel {
    /// Label for history entry `index`.
    pub fn new(index: usize) -> Self {
        let description = if index == 0 {
            "game start".to_string()
        } else {
            format!("move #{}", index)
        };
        Self { index, description }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Go to {}", self.description)
    }
}

/// Lazy iterator over [`MoveLabel`]s; see [`Game::move_labels`].
#[derive(Debug, Clone)]
pub struct MoveLabels {
    range: std::ops::Range<usize>,
}

impl Iterator for MoveLabels {
    type Item = MoveLabel;

    fn next(&mut self) -> Option<MoveLabel> {
        self.range.next().map(MoveLabel::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for MoveLabels {
    fn next_back(&mut self) -> Option<MoveLabel> {
        self.range.next_back().map(MoveLabel::new)
    }
}

impl ExactSizeIterator for MoveLabels {}

/// Snapshot of what the view layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The viewed board.
    board: Board,
    /// Status line.
    status: Status,
    /// Index of the viewed snapshot.
    current_move: usize,
    /// Jump targets, oldest first.
    moves: Vec<MoveLabel>,
}
