//! Text form: the player types `row col` and presses Enter.

use super::{InputError, Scene, View, parse_number};
use crate::Command;
use crate::ui::center_rect;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Board, Cell, Coord};

/// Row and column entered as two numbers; empty cells show `_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateView;

impl CoordinateView {
    /// The board as text, with row and column numbers.
    ///
    /// ```text
    ///   0 1 2
    /// 0 X _ _
    /// 1 _ O _
    /// 2 _ _ _
    /// ```
    pub fn board_text(board: &Board) -> String {
        let mut out = String::from("  0 1 2");
        for (r, row) in board.rows().iter().enumerate() {
            out.push_str(&format!("\n{r}"));
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '_',
                    Cell::Marked(mark) => mark.symbol(),
                };
                out.push(' ');
                out.push(symbol);
            }
        }
        out
    }
}

impl View for CoordinateView {
    fn title(&self) -> &'static str {
        "Coordinates"
    }

    fn hint(&self) -> &'static str {
        "Type row col + Enter"
    }

    /// Accepts `row col`, `row,col` or `(row, col)`.
    fn parse_move(&self, input: &str) -> Result<Coord, InputError> {
        let cleaned = input.replace(['(', ')', ','], " ");
        let fields: Vec<&str> = cleaned.split_whitespace().collect();
        let [row, col] = fields.as_slice() else {
            return Err(InputError::WrongArity {
                expected: 2,
                found: fields.len(),
            });
        };

        Ok(Coord::new(parse_number(row)?, parse_number(col)?))
    }

    fn cell_label(&self, coord: Coord) -> String {
        coord.to_string()
    }

    fn key_command(&self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() || " ,()-".contains(c) => {
                Some(Command::Type(c))
            }
            KeyCode::Backspace => Some(Command::Erase),
            KeyCode::Enter => Some(Command::Submit),
            _ => None,
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, scene: &Scene<'_>) {
        let form = center_rect(area, 24, 9);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Length(3)])
            .split(form);

        let board = Paragraph::new(Self::board_text(&scene.snapshot.board))
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(board, chunks[0]);

        let input = Paragraph::new(format!("{}_", scene.input))
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Move (row col)"));
        frame.render_widget(input, chunks[1]);
    }
}
