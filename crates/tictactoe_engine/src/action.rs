//! Placement records and the rejection type.
//!
//! Accepted placements are domain events: they are kept in the game history,
//! can be replayed, and are handed back to the caller so it can render them.

use super::{GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};

/// An accepted placement: a mark written at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The mark just placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Status after evaluating the board.
    pub status: GameStatus,
}

impl Placement {
    /// Returns the placement as a history entry.
    pub fn as_move(&self) -> Move {
        Move::new(self.mark, self.position)
    }
}

/// A placement the engine declined. The game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has been won or tied; reset before placing again.
    #[display("Game is over ({})", _0)]
    GameOver(#[error(not(source))] GameStatus),
}
