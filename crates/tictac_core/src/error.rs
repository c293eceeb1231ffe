//! Error types for board and game operations.

use crate::Coord;
use derive_more::{Display, Error};

/// Error returned when a move or strategy query cannot be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinate lies outside the 3x3 grid.
    #[display("Coordinate {coord} is outside the board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
    },

    /// Target cell already holds a mark.
    #[display("Cell {coord} is already occupied")]
    OccupiedCell {
        /// The rejected coordinate.
        coord: Coord,
    },

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// A strategy was asked to move on a full board.
    #[display("No moves available")]
    NoMovesAvailable,
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, GameError>;
