//! Computer opponent strategies.

mod blocking;
mod random;

pub use blocking::BlockingStrategy;
pub use random::RandomStrategy;

use crate::{Coord, GameState, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Picks the computer's next move.
///
/// Strategies only read the game; [`GameState::apply_computer_move`] commits
/// the chosen cell.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Short identifier, matching [`StrategyKind`]'s name.
    fn name(&self) -> &'static str;

    /// Returns the cell the computer wants to play.
    ///
    /// # Errors
    ///
    /// [`crate::GameError::NoMovesAvailable`] when the board is full.
    fn desired_move(&self, game: &GameState) -> Result<Coord>;
}

/// Selectable strategies, by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Uniformly random empty cell.
    #[default]
    Random,
    /// Wins when it can, blocks single threats, then plays an opening book.
    #[strum(to_string = "blocking", serialize = "stopper")]
    #[serde(alias = "stopper")]
    Blocking,
}

impl StrategyKind {
    /// Builds the strategy, seeding its random source when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Arc<dyn Strategy> {
        let random = match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        };
        match self {
            StrategyKind::Random => Arc::new(random),
            StrategyKind::Blocking => Arc::new(BlockingStrategy::with_fallback(random)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_names_match_strategy_names() {
        for kind in StrategyKind::iter() {
            assert_eq!(kind.build(Some(1)).name(), kind.to_string());
        }
    }

    #[test]
    fn test_kind_parses_aliases() {
        assert_eq!(StrategyKind::from_str("Random"), Ok(StrategyKind::Random));
        assert_eq!(StrategyKind::from_str("stopper"), Ok(StrategyKind::Blocking));
        assert!(StrategyKind::from_str("minimax").is_err());
    }
}
