//! The "stopper" computer player: win, block, opening book, then random.

use super::{RandomStrategy, Strategy};
use crate::{Board, Coord, GameError, GameState, LINES, Mark, Result, open_cells};
use tracing::{debug, instrument};

/// Replies to a first move on the center or an edge. Corner openings are
/// answered with the center.
const OPENING_REPLIES: [(Coord, Coord); 5] = [
    (Coord::CENTER, Coord::new(0, 0)),
    (Coord::new(0, 1), Coord::new(0, 2)),
    (Coord::new(1, 2), Coord::new(2, 2)),
    (Coord::new(2, 1), Coord::new(2, 0)),
    (Coord::new(1, 0), Coord::new(0, 0)),
];

/// Opposite-corner pairs answered with the bottom edge on the human's second move.
const OPPOSITE_CORNERS: [[Coord; 2]; 2] = [
    [Coord::new(0, 0), Coord::new(2, 2)],
    [Coord::new(2, 0), Coord::new(0, 2)],
];

const OPPOSITE_CORNERS_REPLY: Coord = Coord::new(2, 1);

/// Tries to win, otherwise blocks the human, otherwise follows a short opening
/// book before falling back to a random cell.
///
/// Decision order for each move:
///
/// 1. complete a line of two O's, taking the lowest-indexed line in [`LINES`];
/// 2. block the human when exactly one line holds two X's and a gap. With two
///    or more such lines the threat is treated as ambiguous and not blocked;
/// 3. with 8 moves left, answer the human's opening cell from the book; with 6
///    moves left, answer two opposite X corners with (2, 1);
/// 4. pick uniformly among the empty cells.
#[derive(Debug)]
pub struct BlockingStrategy {
    fallback: RandomStrategy,
}

impl BlockingStrategy {
    const OWN: Mark = Mark::O;
    const OPPONENT: Mark = Self::OWN.opponent();

    /// Creates the strategy with an OS-seeded random fallback.
    pub fn new() -> Self {
        Self::with_fallback(RandomStrategy::new())
    }

    /// Creates the strategy with a fixed-seed random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::with_fallback(RandomStrategy::seeded(seed))
    }

    /// Creates the strategy with the given random fallback.
    pub fn with_fallback(fallback: RandomStrategy) -> Self {
        Self { fallback }
    }

    fn winning_cell(board: &Board) -> Option<Coord> {
        LINES
            .iter()
            .find_map(|line| line.open_cell(board, Self::OWN))
    }

    fn blocking_cell(board: &Board) -> Option<Coord> {
        match open_cells(board, Self::OPPONENT).as_slice() {
            [] => None,
            [only] => Some(*only),
            threats => {
                debug!(threats = threats.len(), "Ambiguous threat, not blocking");
                None
            }
        }
    }

    fn opening_reply(opening: Coord) -> Option<Coord> {
        if opening.is_corner() {
            return Some(Coord::CENTER);
        }
        OPENING_REPLIES
            .iter()
            .find(|&&(cell, _)| cell == opening)
            .map(|&(_, reply)| reply)
    }

    fn book_move(board: &Board, remaining: usize) -> Option<Coord> {
        let candidate = match remaining {
            8 => board
                .cells_marked_with(Self::OPPONENT)
                .first()
                .and_then(|&opening| Self::opening_reply(opening)),
            6 => OPPOSITE_CORNERS
                .iter()
                .any(|pair| pair.iter().all(|&c| board.holds(c, Self::OPPONENT)))
                .then_some(OPPOSITE_CORNERS_REPLY),
            _ => None,
        };
        candidate.filter(|&coord| board.is_empty(coord))
    }
}

impl Default for BlockingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BlockingStrategy {
    fn name(&self) -> &'static str {
        "blocking"
    }

    #[instrument(skip_all, fields(remaining = game.remaining_cells()))]
    fn desired_move(&self, game: &GameState) -> Result<Coord> {
        let board = game.board();
        if board.remaining_cells() == 0 {
            return Err(GameError::NoMovesAvailable);
        }

        if let Some(coord) = Self::winning_cell(board) {
            debug!(%coord, "Completing own line");
            return Ok(coord);
        }

        if let Some(coord) = Self::blocking_cell(board) {
            debug!(%coord, "Blocking");
            return Ok(coord);
        }

        if let Some(coord) = Self::book_move(board, game.remaining_cells()) {
            debug!(%coord, "Book reply");
            return Ok(coord);
        }

        let coord = self.fallback.choose(board)?;
        debug!(%coord, "Random fallback");
        Ok(coord)
    }
}
