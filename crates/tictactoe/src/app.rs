//! Application state and input handling.
//!
//! `App` owns the one [`Game`] the shell is playing and turns key presses and
//! mouse clicks into engine calls. It never draws; see [`crate::ui`].

use crate::config::ShellConfig;
use crate::input::move_cursor;
use crate::layout::{Regions, Target};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{Game, Position, WinningLine, outcome_message, status_line};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    /// Outcome banner of the last finished game.
    message: Option<String>,
    /// Why the last placement was refused.
    notice: Option<String>,
    /// Line highlighted on the board; kept across an automatic reset.
    highlight: Option<WinningLine>,
    auto_reset: bool,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            message: None,
            notice: None,
            highlight: None,
            auto_reset: *config.auto_reset(),
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Outcome banner (`"X WON!"`, `"TIE GAME"`) while one is shown.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Text for the status bar: a rejection reason, or whose turn it is.
    pub fn status(&self) -> String {
        match &self.notice {
            Some(notice) => notice.clone(),
            None => status_line(&self.game),
        }
    }

    /// Winning line to highlight, if the last game was won.
    pub fn highlight(&self) -> Option<WinningLine> {
        self.highlight
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Set once the user asks to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.status().is_finished() {
                    self.reset();
                } else {
                    self.place(self.cursor);
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let number = c.to_digit(10).map_or(0, |d| d as usize);
                if let Some(pos) = Position::from_number(number) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; `area` is the terminal area the UI was drawn in.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match Regions::new(area).hit(event.column, event.row) {
            Some(Target::Cell(pos)) => {
                self.cursor = pos;
                self.place(pos);
            }
            // The banner doubles as the "play again" button.
            Some(Target::Message) if self.message.is_some() => self.reset(),
            _ => {}
        }
    }

    /// Places the current mark, recording the outcome or the refusal.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(placement) => {
                debug!(placed = %placement.as_move(), status = %placement.status, "Placement accepted");
                self.notice = None;
                self.message = outcome_message(placement.status);
                self.highlight = self.game.winning_line().map(|(line, _)| line);

                if self.auto_reset && placement.status.is_finished() {
                    info!(status = %placement.status, "Auto-resetting finished game");
                    self.game.reset();
                }
            }
            Err(err) => {
                debug!(error = %err, "Placement refused");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.message = None;
        self.notice = None;
        self.highlight = None;
    }
}
