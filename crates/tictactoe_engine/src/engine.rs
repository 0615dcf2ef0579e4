//! The tic-tac-toe game engine.

use super::action::{InvalidMove, Move, Placement};
use super::rules::{self, WinningLine};
use super::types::{Board, GameState, GameStatus, Mark};
use super::Position;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns one [`GameState`] plus the history of accepted placements. Every
/// mutation goes through [`Game::place`] or [`Game::reset`], so the state is
/// never aliased and any number of games can live side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    state: GameState,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            history: Vec::new(),
        }
    }

    /// Builds a game by placing each position in order.
    ///
    /// Stops at the first rejected placement and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for &pos in moves {
            game.place(pos)?;
        }
        Ok(game)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the number of placements since the last reset.
    pub fn turn_count(&self) -> u8 {
        self.state.turn_count()
    }

    /// Returns the mark that places next.
    pub fn current_mark(&self) -> Mark {
        self.state.current_mark()
    }

    /// Returns accepted placements since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_finished() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and leaves the game untouched if the game is
    /// over, the coordinates are outside `[0, 2]`, or the cell is occupied.
    #[instrument(skip(self), fields(mark = %self.current_mark()))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Placement, InvalidMove> {
        if self.status().is_finished() {
            warn!(status = %self.status(), "Placement rejected: game over");
            return Err(InvalidMove::GameOver(self.status()));
        }

        let pos = Position::from_coords(row, col).ok_or_else(|| {
            warn!("Placement rejected: off the board");
            InvalidMove::OutOfRange { row, col }
        })?;

        self.place(pos)
    }

    /// Places the current mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_mark`], minus the range check.
    #[instrument(skip(self), fields(mark = %self.current_mark()))]
    pub fn place(&mut self, pos: Position) -> Result<Placement, InvalidMove> {
        if self.status().is_finished() {
            warn!(status = %self.status(), "Placement rejected: game over");
            return Err(InvalidMove::GameOver(self.status()));
        }

        if !self.board().is_empty(pos) {
            warn!(position = %pos, "Placement rejected: cell occupied");
            return Err(InvalidMove::CellOccupied(pos));
        }

        let mark = self.current_mark();
        self.state.apply_mark(pos, mark);
        self.update_status();

        let placement = Placement::new(mark, pos, self.status());
        self.history.push(placement.as_move());

        let status = placement.status;
        debug!(placed = %placement.as_move(), turn = self.turn_count(), %status, "Mark placed");
        if status.is_finished() {
            info!(%status, turns = self.turn_count(), "Game finished");
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(placement)
    }

    /// Returns the winning mark, scanning lines in fixed order.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(self.board())
    }

    /// Returns the first completed line and its mark, if any.
    pub fn winning_line(&self) -> Option<(WinningLine, Mark)> {
        rules::winning_line(self.board())
    }

    /// True when every cell is marked and no line is made.
    pub fn check_tie(&self) -> bool {
        rules::is_tie(self.board())
    }

    /// Returns the game to its creation state.
    #[instrument(skip(self), fields(turns = self.turn_count(), status = %self.status()))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Win is checked before tie: a last move that completes a line wins.
    fn update_status(&mut self) {
        if let Some(winner) = self.check_winner() {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_full(self.board()) {
            self.state.set_status(GameStatus::Tied);
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};
        use tracing::error;

        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                error!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated: {:?}", violations);
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
