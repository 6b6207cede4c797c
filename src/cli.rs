//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use time_travel_tictactoe::Step;

/// Tic-tac-toe with a browsable, branchable move history
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults are used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Hide the 1-9 key shown on empty squares
        #[arg(long)]
        no_hints: bool,
    },

    /// Apply scripted steps and print the resulting game
    Replay {
        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Steps: a cell index (0-8) to play, or @N to jump to move N
        #[arg(value_name = "STEP", required = true)]
        steps: Vec<Step>,
    },
}
