//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crate::games::tictactoe::{Game, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_hints: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application at the start of a new game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_hints,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Feedback from the last rejected action, cleared by the next success.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            (_, KeyCode::Tab | KeyCode::BackTab) => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_move();
            }
            (_, KeyCode::Char(c @ '1'..='9')) => {
                self.play(usize::from(c as u8 - b'1'));
            }
            (_, KeyCode::Home) => self.jump(0),
            (_, KeyCode::End) => self.jump(self.game.history().len() - 1),
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.play(self.cursor.to_index());
            }
            (Focus::Board, code) => self.cursor = move_cursor(self.cursor, code),
            (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => self.jump(self.selected),
            (Focus::History, code) => {
                self.selected = move_selection(self.selected, self.game.history().len(), code);
            }
        }
    }

    /// Cell click: place a mark.
    fn play(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(action) => {
                self.cursor = action.position;
                self.selected = self.game.current_move();
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                self.message = Some(e.to_string());
            }
        }
    }

    /// History click: view an earlier board.
    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => {
                self.selected = index;
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected jump");
                self.message = Some(e.to_string());
            }
        }
    }
}
