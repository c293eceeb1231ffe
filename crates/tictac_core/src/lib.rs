//! Tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with validated placement
//! - **Lines**: the eight winning lines and win detection
//! - **GameState**: move counting, status, active strategy, change notification
//! - **Strategies**: [`RandomStrategy`] and [`BlockingStrategy`] behind [`Strategy`]
//! - **SharedGame**: a mutex-guarded handle for multi-threaded front ends
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tictac_core::{BlockingStrategy, Coord, GameState, Status};
//!
//! let mut game = GameState::new(Arc::new(BlockingStrategy::seeded(1)));
//! let turn = game.play_turn(Coord::new(0, 0)).unwrap();
//! assert_eq!(turn.computer, Some(Coord::new(1, 1)));
//! assert_eq!(turn.status, Status::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod lines;
mod observer;
mod shared;
mod strategy;
mod types;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

pub use board::Board;
pub use error::{GameError, Result};
pub use game::{GameState, Turn};
pub use lines::{LINES, Line, find_winner, open_cells};
pub use observer::{Observer, SubscriptionId};
pub use shared::SharedGame;
pub use strategy::{BlockingStrategy, RandomStrategy, Strategy, StrategyKind};
pub use types::{Cell, Coord, Mark, Status};
