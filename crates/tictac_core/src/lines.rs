//! Winning lines and win detection.
//!
//! Every rule that looks for "three in a row" or "two in a row with a gap"
//! iterates the same [`LINES`] table.

use crate::{Board, Cell, Coord, Mark};
use tracing::instrument;

/// Three cells that win the game when owned by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(pub [Coord; 3]);

/// The eight winning lines: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]),
    Line([Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]),
    Line([Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)]),
    // Columns
    Line([Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]),
    Line([Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]),
    Line([Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]),
    // Diagonals
    Line([Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]),
    Line([Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]),
];

impl Line {
    /// The cells of this line.
    pub fn cells(&self) -> &[Coord; 3] {
        &self.0
    }

    /// Returns the mark owning all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0.map(|coord| board.get(coord).unwrap_or(Cell::Empty));
        match a {
            Cell::Marked(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }

    /// Returns the empty cell when the line holds exactly two `mark`s and one
    /// empty cell.
    pub fn open_cell(&self, board: &Board, mark: Mark) -> Option<Coord> {
        let owned = self.0.iter().filter(|&&c| board.holds(c, mark)).count();
        let mut empty = self.0.iter().copied().filter(|&c| board.is_empty(c));
        match (owned, empty.next()) {
            (2, Some(gap)) => Some(gap),
            _ => None,
        }
    }
}

/// Returns the owner of the first fully-owned line in [`LINES`] order.
///
/// If both marks own a line (never reachable with alternating moves) the mark
/// owning the lower-indexed line is reported.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line.owner(board))
}

/// Empty cells that would complete a line for `mark`, one entry per line.
///
/// A cell shared by two threatened lines appears twice.
pub fn open_cells(board: &Board, mark: Mark) -> Vec<Coord> {
    LINES
        .iter()
        .filter_map(|line| line.open_cell(board, mark))
        .collect()
}
