//! Time-travel tic-tac-toe.
//!
//! A game of tic-tac-toe kept as a history of board snapshots. Any earlier
//! snapshot can be viewed, and playing from it discards the moves that
//! followed.
//!
//! # Architecture
//!
//! - **Rules**: pure winner and full-board checks over a single [`Board`]
//! - **Game**: the snapshot [`History`], the viewed move and the move/jump operations
//! - **Invariants / contracts**: checks that every accepted move keeps the history sound
//! - **TUI**: a ratatui front-end that renders a [`Game`] and feeds key presses back
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{Game, Mark, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(2)?;
//! assert_eq!(game.status().to_string(), "Next player: X");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Contract, CurrentInBoundsInvariant, Game, GameView, History,
    HistoryInvariants, Invariant, InvariantSet, InvariantViolation, JumpError, Mark, Move,
    MoveContract, MoveError, MoveLabel, MoveLabels, NoMoveAfterWinInvariant, NotWon, Position,
    ReplayError, SingleCellDeltaInvariant, Square, SquareIsEmpty, StartsEmptyInvariant, Status,
    Step, StepError, StepParseError, rules,
};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};
