//! The 3x3 grid of cells.

use crate::{BOARD_SIZE, Cell, Coord, GameError, Mark, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Returns the contents of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when `coord` is outside the grid.
    pub fn get(&self, coord: Coord) -> Result<Cell> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .ok_or(GameError::OutOfBounds { coord })
    }

    /// True when `coord` is on the board and nobody has played there.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(Cell::Empty))
    }

    /// True when `coord` holds `mark`.
    pub fn holds(&self, coord: Coord, mark: Mark) -> bool {
        matches!(self.get(coord), Ok(Cell::Marked(m)) if m == mark)
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`] for coordinates outside the grid,
    /// [`GameError::OccupiedCell`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<()> {
        let cell = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(GameError::OutOfBounds { coord })?;

        if !cell.is_empty() {
            return Err(GameError::OccupiedCell { coord });
        }

        *cell = Cell::Marked(mark);
        trace!("Mark placed");
        Ok(())
    }

    /// Number of empty cells.
    pub fn remaining_cells(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Coordinates of every cell holding `mark`.
    pub fn cells_marked_with(&self, mark: Mark) -> BTreeSet<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.mark() == Some(mark))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL
            .into_iter()
            .map(|coord| (coord, self.cells[coord.row][coord.col]))
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub(crate) fn clear(&mut self) {
        self.cells = Default::default();
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => "_".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.remaining_cells(), 9);
        assert!(Coord::ALL.iter().all(|&c| board.is_empty(c)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        let coord = Coord::new(0, 3);
        assert_eq!(board.get(coord), Err(GameError::OutOfBounds { coord }));
        assert!(!board.is_empty(coord));
    }

    #[test]
    fn test_place_rejects_occupied_and_keeps_first_mark() {
        let mut board = Board::new();
        board.place(Coord::CENTER, Mark::X).unwrap();

        let result = board.place(Coord::CENTER, Mark::O);

        assert_eq!(
            result,
            Err(GameError::OccupiedCell {
                coord: Coord::CENTER
            })
        );
        assert_eq!(board.get(Coord::CENTER), Ok(Cell::Marked(Mark::X)));
        assert_eq!(board.remaining_cells(), 8);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        let coord = Coord::new(5, 1);
        assert_eq!(
            board.place(coord, Mark::X),
            Err(GameError::OutOfBounds { coord })
        );
        assert_eq!(board.remaining_cells(), 9);
    }

    #[test]
    fn test_cells_marked_with() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(2, 2), Mark::X).unwrap();
        board.place(Coord::new(1, 1), Mark::O).unwrap();

        let xs: Vec<_> = board.cells_marked_with(Mark::X).into_iter().collect();
        assert_eq!(xs, vec![Coord::new(0, 0), Coord::new(2, 2)]);
        assert_eq!(board.cells_marked_with(Mark::O).len(), 1);
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(1, 1), Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|_|_\n_|O|_\n_|_|_");
    }
}
