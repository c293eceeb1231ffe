//! Change notification for front ends.

use crate::GameState;
use derive_more::Display;

/// Receives a callback after every committed move or reset.
pub trait Observer: Send {
    /// Called synchronously with the updated game.
    fn on_change(&mut self, game: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState) + Send,
{
    fn on_change(&mut self, game: &GameState) {
        self(game)
    }
}

/// Handle returned by [`GameState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("subscription #{_0}")]
pub struct SubscriptionId(u64);

/// Subscribers in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detaches the list so observers can borrow the game while being called.
    pub(crate) fn take(&mut self) -> Vec<(SubscriptionId, Box<dyn Observer>)> {
        std::mem::take(&mut self.entries)
    }

    /// Reattaches a list detached by [`Subscribers::take`].
    pub(crate) fn restore(&mut self, entries: Vec<(SubscriptionId, Box<dyn Observer>)>) {
        debug_assert!(self.entries.is_empty());
        self.entries = entries;
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
