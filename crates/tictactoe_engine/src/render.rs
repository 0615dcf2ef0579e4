//! Text formatting for game results and boards.
//!
//! These are pure functions of the game; front ends decide where the text goes.

use super::{Board, Cell, Game, GameStatus, Position};

/// Outcome banner for a finished game: `"X WON!"` or `"TIE GAME"`.
///
/// Returns `None` while the game is in progress.
pub fn outcome_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) => Some(format!("{mark} WON!")),
        GameStatus::Tied => Some("TIE GAME".to_string()),
    }
}

/// One-line status: the outcome banner, or whose turn it is.
pub fn status_line(game: &Game) -> String {
    outcome_message(game.status()).unwrap_or_else(|| format!("{} to move", game.current_mark()))
}

/// Formats the board as three `a|b|c` rows; empty cells show their 1-based number.
pub fn render_board(board: &Board) -> String {
    let mut result = String::new();
    for (idx, pos) in Position::ALL.into_iter().enumerate() {
        match board.get(pos) {
            Cell::Empty => result.push_str(&(idx + 1).to_string()),
            Cell::Marked(mark) => result.push_str(&mark.to_string()),
        }
        match pos.col() {
            2 if pos.row() < 2 => result.push_str("\n-+-+-\n"),
            2 => {}
            _ => result.push('|'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameStatus::InProgress), None);
        assert_eq!(outcome_message(GameStatus::Won(Mark::X)).as_deref(), Some("X WON!"));
        assert_eq!(outcome_message(GameStatus::Won(Mark::O)).as_deref(), Some("O WON!"));
        assert_eq!(outcome_message(GameStatus::Tied).as_deref(), Some("TIE GAME"));
    }

    #[test]
    fn test_status_line_names_next_mark() {
        let mut game = Game::new();
        assert_eq!(status_line(&game), "X to move");
        game.place(Position::Center).expect("legal move");
        assert_eq!(status_line(&game), "O to move");
    }

    #[test]
    fn test_render_empty_board() {
        assert_eq!(render_board(&Board::new()), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_render_marks() {
        let game = Game::replay(&[Position::TopLeft, Position::Center]).expect("legal moves");
        assert_eq!(render_board(game.board()), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
