//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// The human player (moves first).
    X,
    /// The computer player (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used when rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True when nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// A `(row, col)` board coordinate, 0-indexed.
///
/// Construction does not validate; the board rejects coordinates outside the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Center cell.
    pub const CENTER: Coord = Coord::new(1, 1);

    /// Row-major index (0-8), or `None` outside the grid.
    pub fn index(self) -> Option<usize> {
        (self.row < crate::BOARD_SIZE && self.col < crate::BOARD_SIZE)
            .then_some(self.row * crate::BOARD_SIZE + self.col)
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        matches!((self.row, self.col), (0, 0) | (0, 2) | (2, 0) | (2, 2))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Derived classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Moves can still be made.
    #[default]
    InProgress,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
    /// Board is full and nobody completed a line.
    Tied,
}

impl Status {
    /// Status reporting a win for `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Status::XWon,
            Mark::O => Status::OWon,
        }
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::XWon => Some(Mark::X),
            Status::OWon => Some(Mark::O),
            Status::InProgress | Status::Tied => None,
        }
    }

    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "In progress"),
            Status::XWon => write!(f, "X wins"),
            Status::OWon => write!(f, "O wins"),
            Status::Tied => write!(f, "Tied"),
        }
    }
}
