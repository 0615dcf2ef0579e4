//! Tests for the tic-tac-toe engine's public operations.

use tictactoe_engine::{
    Cell, Game, GameStatus, InvalidMove, Mark, Position, WINNING_LINES, outcome_message,
};

fn play(moves: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in moves {
        game.place_mark(row, col).expect("legal move");
    }
    game
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_mark(), Mark::X);
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert!(game.history().is_empty());
}

#[test]
fn test_place_mark_returns_mark_and_status() {
    let mut game = Game::new();

    let first = game.place_mark(1, 1).expect("legal move");
    assert_eq!(first.mark, Mark::X);
    assert_eq!(first.position, Position::Center);
    assert_eq!(first.status, GameStatus::InProgress);

    let second = game.place_mark(0, 0).expect("legal move");
    assert_eq!(second.mark, Mark::O);
    assert_eq!(game.turn_count(), 2);
    assert_eq!(game.board().get(Position::TopLeft), Cell::Marked(Mark::O));
}

#[test]
fn test_diagonal_win_scenario() {
    let game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert_eq!(game.check_winner(), Some(Mark::X));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert!(!game.check_tie());
    assert_eq!(
        game.winning_line().map(|(line, _)| line),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_tie_scenario() {
    // X O X / X O O / O X X
    let game = play(&[
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);

    assert!(game.check_tie());
    assert_eq!(game.check_winner(), None);
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(outcome_message(game.status()).as_deref(), Some("TIE GAME"));
}

#[test]
fn test_win_on_last_cell_beats_tie() {
    // X O X / O X O / O X X, X completes the diagonal with the ninth mark.
    let game = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (2, 1),
        (1, 2),
        (1, 1),
        (2, 0),
        (2, 2),
    ]);

    assert_eq!(game.turn_count(), 9);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert!(!game.check_tie());
}

#[test]
fn test_every_winning_line_wins() {
    for line in WINNING_LINES {
        // O answers in cells off the line, never completing one of its own
        // before X's third mark lands.
        let spare: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| !line.contains(pos))
            .collect();
        let mut game = Game::new();
        let mut spare = spare.into_iter();

        for (i, pos) in line.into_iter().enumerate() {
            game.place(pos).expect("legal move");
            if i < 2 {
                let reply = spare.next().expect("spare cell");
                game.place(reply).expect("legal move");
            }
        }

        assert_eq!(game.check_winner(), Some(Mark::X), "line {:?}", line);
    }
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut game = play(&[(1, 1)]);
    let before = game.clone();

    let err = game.place_mark(1, 1).unwrap_err();
    assert_eq!(err, InvalidMove::CellOccupied(Position::Center));
    assert_eq!(game, before);

    // Rejection does not consume O's turn.
    assert_eq!(game.current_mark(), Mark::O);
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut game = Game::new();
    assert_eq!(game.place_mark(3, 0), Err(InvalidMove::OutOfRange { row: 3, col: 0 }));
    assert_eq!(game.place_mark(0, 7), Err(InvalidMove::OutOfRange { row: 0, col: 7 }));
    assert_eq!(game, Game::new());
}

#[test]
fn test_no_placement_after_game_over() {
    let mut game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    let before = game.clone();

    let err = game.place_mark(2, 0).unwrap_err();
    assert_eq!(err, InvalidMove::GameOver(GameStatus::Won(Mark::X)));
    assert_eq!(game, before);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_game_over_checked_before_range() {
    let mut game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert!(matches!(game.place_mark(9, 9), Err(InvalidMove::GameOver(_))));
}

#[test]
fn test_reset_returns_to_creation_state() {
    let mut game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    game.reset();

    assert_eq!(game, Game::new());
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_mark(), Mark::X);

    game.place_mark(0, 0).expect("board is open again");
}

#[test]
fn test_games_are_independent() {
    let mut first = Game::new();
    let second = Game::new();
    first.place_mark(0, 0).expect("legal move");

    assert_eq!(first.turn_count(), 1);
    assert_eq!(second.turn_count(), 0);
}

#[test]
fn test_replay_stops_at_first_rejection() {
    let err = Game::replay(&[Position::Center, Position::Center]).unwrap_err();
    assert_eq!(err, InvalidMove::CellOccupied(Position::Center));

    let game = Game::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_mark(), Mark::X);
}

#[test]
fn test_invalid_move_messages() {
    assert_eq!(
        InvalidMove::OutOfRange { row: 4, col: 1 }.to_string(),
        "Cell (4, 1) is off the board"
    );
    assert_eq!(
        InvalidMove::CellOccupied(Position::Center).to_string(),
        "Center is already occupied"
    );
    assert_eq!(
        InvalidMove::GameOver(GameStatus::Tied).to_string(),
        "Game is over (tied)"
    );
}

#[test]
fn test_state_serializes() {
    let game = play(&[(1, 1)]);
    let json = serde_json::to_value(game.state()).expect("serializable");
    assert_eq!(json["turn_count"], 1);
    assert_eq!(json["status"], "InProgress");
}
