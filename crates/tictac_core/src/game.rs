//! Game state: board, status, active strategy and subscribers.
//!
//! Turn order is a usage contract rather than a rule enforced here: the front
//! end submits X for the human, then asks the active strategy to move for O.
//! [`GameState::play_turn`] performs both halves in that order.

use crate::observer::Subscribers;
use crate::{
    BOARD_SIZE, Board, Cell, Coord, GameError, Mark, Observer, RandomStrategy, Result, Status,
    Strategy, SubscriptionId, find_winner,
};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Outcome of a human move followed by the computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human played.
    pub human: Coord,
    /// Cell the computer played, `None` when the human's move ended the game.
    pub computer: Option<Coord>,
    /// Status after the turn.
    pub status: Status,
}

/// A single game against the computer.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    remaining: usize,
    status: Status,
    strategy: Arc<dyn Strategy>,
    subscribers: Subscribers,
}

impl GameState {
    /// Creates a new game using `strategy` for the computer player.
    #[instrument(skip(strategy), fields(strategy = strategy.name()))]
    pub fn new(strategy: Arc<dyn Strategy>) -> Self {
        Self {
            board: Board::new(),
            remaining: TOTAL_CELLS,
            status: Status::InProgress,
            strategy,
            subscribers: Subscribers::default(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of a cell.
    pub fn get(&self, coord: Coord) -> Result<Cell> {
        self.board.get(coord)
    }

    /// True when `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.board.is_empty(coord)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Moves left before the board is full.
    pub fn remaining_cells(&self) -> usize {
        self.remaining
    }

    /// Moves played since the last reset.
    pub fn moves_played(&self) -> usize {
        TOTAL_CELLS - self.remaining
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The winner, if the game has been won.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True while moves are accepted.
    pub fn is_running(&self) -> bool {
        !self.status.is_terminal()
    }

    /// The active computer strategy.
    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }

    /// Swaps the computer strategy. The board is untouched and nobody is notified.
    #[instrument(skip(self, strategy), fields(from = self.strategy.name(), to = strategy.name()))]
    pub fn set_strategy(&mut self, strategy: Arc<dyn Strategy>) {
        info!("Strategy changed");
        self.strategy = strategy;
    }

    /// Places `mark` at `coord`, recomputes the status and notifies subscribers.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game is won or tied, otherwise the
    /// errors of [`Board::place`]. A rejected move changes nothing.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coord: Coord, mark: Mark) -> Result<Status> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move rejected, game is over");
            return Err(GameError::GameOver);
        }

        if let Err(e) = self.board.place(coord, mark) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        self.remaining -= 1;
        self.status = evaluate(&self.board);
        debug!(status = ?self.status, remaining = self.remaining, "Move applied");

        self.notify();
        Ok(self.status)
    }

    /// Applies the human player's move (X).
    pub fn apply_human_move(&mut self, coord: Coord) -> Result<Status> {
        self.apply_move(coord, Mark::X)
    }

    /// Asks the active strategy for a move and applies it for the computer (O).
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended, or whatever the
    /// strategy reports.
    #[instrument(skip(self), fields(strategy = self.strategy.name()))]
    pub fn apply_computer_move(&mut self) -> Result<Coord> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let strategy = Arc::clone(&self.strategy);
        let coord = strategy.desired_move(self)?;
        debug!(%coord, "Computer chose cell");

        self.apply_move(coord, Mark::O)?;
        Ok(coord)
    }

    /// Applies the human's move and, if the game goes on, the computer's reply.
    ///
    /// # Errors
    ///
    /// Errors from the human move leave the game untouched. Errors from the
    /// computer's reply are returned after the human move has been committed.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, coord: Coord) -> Result<Turn> {
        let status = self.apply_human_move(coord)?;
        if status.is_terminal() {
            return Ok(Turn {
                human: coord,
                computer: None,
                status,
            });
        }

        let computer = self.apply_computer_move()?;
        Ok(Turn {
            human: coord,
            computer: Some(computer),
            status: self.status,
        })
    }

    /// Starts a new game, keeping the active strategy.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.remaining = TOTAL_CELLS;
        self.status = Status::InProgress;
        info!(strategy = self.strategy.name(), "New game");
        self.notify();
    }

    /// Registers an observer. Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        let id = self.subscribers.add(Box::new(observer));
        debug!(%id, total = self.subscribers.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id);
        debug!(%id, removed, "Observer unsubscribed");
        removed
    }

    /// Calls every observer in order. A panicking observer is re-raised only
    /// after the subscriber list has been put back.
    fn notify(&mut self) {
        let mut observers = self.subscribers.take();
        let outcome = {
            let game: &GameState = self;
            panic::catch_unwind(AssertUnwindSafe(|| {
                for (_, observer) in observers.iter_mut() {
                    observer.on_change(game);
                }
            }))
        };
        self.subscribers.restore(observers);

        if let Err(payload) = outcome {
            warn!(subscribers = self.subscribers.len(), "Observer panicked during notification");
            panic::resume_unwind(payload);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arc::new(RandomStrategy::new()))
    }
}

/// Win beats tie: a full board with a completed line is a win.
fn evaluate(board: &Board) -> Status {
    match find_winner(board) {
        Some(mark) => Status::won_by(mark),
        None if board.remaining_cells() == 0 => Status::Tied,
        None => Status::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn game() -> GameState {
        GameState::new(Arc::new(RandomStrategy::seeded(7)))
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.remaining_cells(), 9);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.size(), 3);
    }

    #[test]
    fn test_apply_move_twice_rejects_second() {
        let mut game = game();
        game.apply_move(Coord::CENTER, Mark::X).unwrap();

        let result = game.apply_move(Coord::CENTER, Mark::O);

        assert_eq!(
            result,
            Err(GameError::OccupiedCell {
                coord: Coord::CENTER
            })
        );
        assert_eq!(game.get(Coord::CENTER), Ok(Cell::Marked(Mark::X)));
        assert_eq!(game.remaining_cells(), 8);
    }

    #[test]
    fn test_rejected_move_does_not_notify() {
        let calls = Arc::new(Mutex::new(0));
        let mut game = game();
        let counter = Arc::clone(&calls);
        game.subscribe(move |_: &GameState| *counter.lock().unwrap() += 1);

        game.apply_move(Coord::CENTER, Mark::X).unwrap();
        let _ = game.apply_move(Coord::CENTER, Mark::X);
        let _ = game.apply_move(Coord::new(3, 3), Mark::X);

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_status_win_beats_full_board() {
        // X O X / O X O / O X X  -> X completes the main diagonal on the last move.
        let mut game = game();
        let moves = [
            ((0, 0), Mark::X),
            ((0, 1), Mark::O),
            ((0, 2), Mark::X),
            ((1, 0), Mark::O),
            ((1, 1), Mark::X),
            ((1, 2), Mark::O),
            ((2, 1), Mark::X),
            ((2, 0), Mark::O),
        ];
        for (coord, mark) in moves {
            assert_eq!(game.apply_move(coord.into(), mark), Ok(Status::InProgress));
        }
        assert_eq!(game.apply_move(Coord::new(2, 2), Mark::X), Ok(Status::XWon));
        assert_eq!(game.remaining_cells(), 0);
    }

    #[test]
    fn test_computer_move_refused_after_game_over() {
        let mut game = game();
        for col in 0..3 {
            game.apply_move(Coord::new(0, col), Mark::O).unwrap();
        }
        assert_eq!(game.status(), Status::OWon);
        assert_eq!(game.apply_computer_move(), Err(GameError::GameOver));
    }

    #[test]
    fn test_panicking_observer_keeps_subscribers() {
        let calls = Arc::new(Mutex::new(0));
        let mut game = game();
        let counter = Arc::clone(&calls);
        game.subscribe(move |_: &GameState| *counter.lock().unwrap() += 1);
        let mut armed = true;
        game.subscribe(move |_: &GameState| {
            if std::mem::take(&mut armed) {
                panic!("observer failure");
            }
        });

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            game.apply_move(Coord::CENTER, Mark::X)
        }));
        assert!(outcome.is_err());

        game.apply_move(Coord::new(0, 0), Mark::O).unwrap();
        game.reset();

        assert_eq!(*calls.lock().unwrap(), 3);
        assert_eq!(game.subscribers.len(), 2);
    }
}
