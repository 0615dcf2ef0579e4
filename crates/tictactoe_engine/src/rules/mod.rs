//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They hold no state, so the
//! engine and the invariant checks share one definition of a win and a tie.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};
