//! Time-travel tic-tac-toe - CLI entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use time_travel_tictactoe::{Game, Settings, Step, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { no_hints } => {
            let settings = if no_hints {
                settings.with_show_hints(false)
            } else {
                settings
            };
            play(&settings)
        }
        Command::Replay { json, steps } => {
            init_stderr_tracing(&settings);
            replay(&steps, json)
        }
    }
}

/// Env filter from `RUST_LOG`, falling back to the settings file.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Run the interactive terminal game.
fn play(settings: &Settings) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    run_tui(settings).context("Terminal UI failed")
}

fn init_stderr_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();
}

/// Apply scripted steps and print the outcome.
#[instrument(skip(steps), fields(count = steps.len()))]
fn replay(steps: &[Step], json: bool) -> Result<()> {
    let game = Game::replay(steps)?;
    info!(
        snapshots = game.history().len(),
        current = game.current_move(),
        "Replay finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&game.view())?);
        return Ok(());
    }

    println!("{}\n", game.current_board().display());
    println!("{}\n", game.status());
    for label in game.move_labels() {
        let marker = if *label.index() == game.current_move() { '>' } else { ' ' };
        println!("{} {}", marker, label);
    }
    Ok(())
}
