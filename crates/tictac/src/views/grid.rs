//! Cursor grid: arrows and Enter, or the digits 1-9.

use super::{InputError, Scene, View, parse_number};
use crate::Command;
use crate::ui::center_rect;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictac_core::{BOARD_SIZE, Board, Cell, Coord, Mark};

/// Cells numbered 1-9 row by row; empty cells show their number and the
/// cursor cell is highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridView;

impl GridView {
    /// The 1-based number of a cell.
    pub fn number(coord: Coord) -> usize {
        coord.row * BOARD_SIZE + coord.col + 1
    }
}

impl View for GridView {
    fn title(&self) -> &'static str {
        "Grid"
    }

    fn hint(&self) -> &'static str {
        "Arrows+Enter or 1-9"
    }

    fn parse_move(&self, input: &str) -> Result<Coord, InputError> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        let [field] = fields.as_slice() else {
            return Err(InputError::WrongArity {
                expected: 1,
                found: fields.len(),
            });
        };

        let value = parse_number(field)?;
        value
            .checked_sub(1)
            .and_then(Coord::from_index)
            .ok_or(InputError::NoSuchCell { value })
    }

    fn cell_label(&self, coord: Coord) -> String {
        Self::number(coord).to_string()
    }

    fn key_command(&self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Command::Cursor(key))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Command::Move(c.to_string())),
            _ => None,
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, scene: &Scene<'_>) {
        // Center the board
        let board_area = center_rect(area, 38, 11);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(board_area);

        for row in 0..BOARD_SIZE {
            draw_row(frame, rows[row * 2], &scene.snapshot.board, scene.cursor, row);
            if row + 1 < BOARD_SIZE {
                draw_separator(frame, rows[row * 2 + 1]);
            }
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..BOARD_SIZE {
        draw_cell(frame, cols[col * 2], board, cursor, Coord::new(row, col));
        if col + 1 < BOARD_SIZE {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord, coord: Coord) {
    let (symbol, base_style) = match board.get(coord).unwrap_or_default() {
        Cell::Empty => (
            GridView::number(coord).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if coord == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
