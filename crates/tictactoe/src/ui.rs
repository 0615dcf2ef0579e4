//! Stateless UI rendering for the shell.

use crate::app::App;
use crate::layout::{CELL_HEIGHT, CELL_WIDTH, Regions};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Mark, Position};

const HELP: &str = "1-9 or arrows+Enter: place  click: place  r: new game  q: quit";

/// Draws the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = Regions::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, app);
    draw_message(frame, regions.message, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, regions: &Regions, app: &App) {
    let board = regions.board;
    let separator = Style::default().fg(Color::DarkGray);

    for offset in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let line = Rect::new(board.x, board.y + offset, board.width, 1).intersection(board);
        let rule = Paragraph::new("─".repeat(board.width as usize)).style(separator);
        frame.render_widget(rule, line);
    }
    for offset in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
        let line = Rect::new(board.x + offset, board.y, 1, board.height).intersection(board);
        let rule = Paragraph::new(vec![Line::from("│"); board.height as usize]).style(separator);
        frame.render_widget(rule, line);
    }

    for pos in Position::ALL {
        draw_cell(frame, regions.cell(pos), app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Cell::Empty if app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut style = base_style;
    if app.highlight().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Middle row of the cell carries the symbol.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_message(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.message() {
        Some(message) => vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(replay_hint(app), Style::default().fg(Color::Gray))),
        ],
        None => vec![Line::from(app.status())],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Hint under the outcome banner. After an automatic reset the board is
/// already clear, so the next placement starts the new game.
fn replay_hint(app: &App) -> &'static str {
    if app.game().status().is_finished() {
        "Click here or press r to play again"
    } else {
        "New board ready: place a mark to play again"
    }
}
