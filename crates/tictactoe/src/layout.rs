//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_engine::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 13;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width: three cells and two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height: three cells and two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a screen coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The message box under the board.
    Message,
}

/// Every region of the screen for a given terminal area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// The whole 3x3 board, separators included.
    pub board: Rect,
    /// Cells in row-major order, indexed like [`Position::to_index`].
    pub cells: [Rect; 9],
    /// Outcome/status message box.
    pub message: Rect,
    /// Key help line.
    pub help: Rect,
}

impl Regions {
    /// Splits the terminal area into regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(4), // Message
                Constraint::Length(1), // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);

        let mut cells = [Rect::default(); 9];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
        }

        Self {
            title: chunks[0],
            board,
            cells,
            message: chunks[2],
            help: chunks[3],
        }
    }

    /// Returns the cell area for a position.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Maps a screen coordinate to what is drawn there.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
        {
            return Some(Target::Cell(pos));
        }
        contains(self.message, column, row).then_some(Target::Message)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
