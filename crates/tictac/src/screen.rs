//! What the terminal shows, kept current by the subscribed view.

use derive_getters::Getters;
use std::sync::{Arc, Mutex, PoisonError};
use tictac_core::{Board, Coord, Mark, Status};

/// Board and status line as of the last change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// Board after the last change.
    pub(crate) board: Board,
    /// Game status after the last change.
    pub(crate) status: Status,
    /// The mark placed by the last change, `None` after a reset.
    pub(crate) last_move: Option<(Coord, Mark)>,
    /// Line shown in the status bar.
    pub(crate) message: String,
}

impl Snapshot {
    /// Records a new board, working out which cell was just played.
    pub(crate) fn record(&mut self, board: &Board, status: Status) {
        self.last_move = board
            .iter()
            .find(|&(coord, cell)| !cell.is_empty() && self.board.is_empty(coord))
            .and_then(|(coord, cell)| cell.mark().map(|mark| (coord, mark)));
        self.board = board.clone();
        self.status = status;
    }
}

/// Shared handle to the current [`Snapshot`].
///
/// The view's observer writes it from inside the game; the draw loop reads it.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    inner: Arc<Mutex<Snapshot>>,
}

impl Screen {
    /// Creates a screen showing an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the status-bar line.
    pub fn set_message(&self, message: impl Into<String>) {
        self.update(|snapshot| snapshot.message = message.into());
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut Snapshot)) {
        f(&mut self.inner.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_finds_new_mark() {
        let mut snapshot = Snapshot::default();
        let mut board = Board::new();
        board.place(Coord::new(2, 0), Mark::X).unwrap();

        snapshot.record(&board, Status::InProgress);
        assert_eq!(snapshot.last_move, Some((Coord::new(2, 0), Mark::X)));

        board.place(Coord::CENTER, Mark::O).unwrap();
        snapshot.record(&board, Status::InProgress);
        assert_eq!(snapshot.last_move, Some((Coord::CENTER, Mark::O)));

        snapshot.record(&Board::new(), Status::InProgress);
        assert_eq!(snapshot.last_move, None);
    }

    #[test]
    fn test_message_is_shared_between_clones() {
        let screen = Screen::new();
        screen.clone().set_message("hello");
        assert_eq!(screen.snapshot().message(), "hello");
    }
}
