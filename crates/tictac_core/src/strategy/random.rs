//! Uniformly random computer player.

use super::Strategy;
use crate::{Board, Coord, GameError, GameState, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

/// Plays a uniformly random empty cell. Easy to beat.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a strategy with a fixed seed, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Picks one of the board's empty cells with equal probability.
    ///
    /// Draws an index into the list of empty cells, so a full board fails
    /// immediately instead of looping.
    pub(crate) fn choose(&self, board: &Board) -> Result<Coord> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(GameError::NoMovesAvailable);
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let index = rng.random_range(0..empty.len());
        Ok(empty[index])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    #[instrument(skip_all)]
    fn desired_move(&self, game: &GameState) -> Result<Coord> {
        let coord = self.choose(game.board())?;
        debug!(%coord, "Random pick");
        Ok(coord)
    }
}
