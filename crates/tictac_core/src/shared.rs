//! Thread-safe handle to a game.

use crate::{Board, Coord, GameState, Mark, Observer, Result, Status, Strategy, SubscriptionId, Turn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// A [`GameState`] behind a single mutex.
///
/// Each call holds the lock for the whole move-and-notify sequence, so at most
/// one mutation is in flight. [`SharedGame::play_turn`] keeps the human move
/// and the computer's reply under one lock.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    /// Wraps a game.
    pub fn new(game: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, coord: Coord, mark: Mark) -> Result<Status> {
        self.lock().apply_move(coord, mark)
    }

    /// See [`GameState::play_turn`].
    #[instrument(skip(self))]
    pub fn play_turn(&self, coord: Coord) -> Result<Turn> {
        self.lock().play_turn(coord)
    }

    /// See [`GameState::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`GameState::set_strategy`].
    pub fn set_strategy(&self, strategy: Arc<dyn Strategy>) {
        self.lock().set_strategy(strategy);
    }

    /// See [`GameState::subscribe`].
    pub fn subscribe(&self, observer: impl Observer + 'static) -> SubscriptionId {
        self.lock().subscribe(observer)
    }

    /// See [`GameState::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.lock().status()
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.lock().board().clone()
    }

    /// Runs `f` with the game locked.
    pub fn with<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.lock())
    }
}

impl From<GameState> for SharedGame {
    fn from(game: GameState) -> Self {
        Self::new(game)
    }
}
