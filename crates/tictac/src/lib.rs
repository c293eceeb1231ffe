//! Terminal front end for tic-tac-toe against the computer.
//!
//! # Architecture
//!
//! - **Views**: a cursor grid and a coordinates form, each with its own move input
//! - **Commands**: key presses mapped to menu actions and move input
//! - **App**: state driving a [`tictac_core::SharedGame`], drawn with ratatui
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use tictac::{App, Config, ViewKind};
//! use tictac_core::StrategyKind;
//!
//! let config = Config::default().with_overrides(Some(StrategyKind::Blocking), Some(ViewKind::Grid), Some(1));
//! let mut app = App::new(&config);
//! app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)).unwrap();
//! assert_eq!(app.screen().snapshot().message(), "O played 5");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
mod input;
mod screen;
mod tui;
mod ui;
mod views;

// Crate-level exports - configuration
pub use cli::Cli;
pub use config::{Config, ConfigError};

// Crate-level exports - input and views
pub use command::{Command, HELP};
pub use input::move_cursor;
pub use views::{CoordinateView, GridView, InputError, Scene, View, ViewKind, ViewRenderer};

// Crate-level exports - application
pub use app::{App, Flow, GAME_OVER, INVALID_MOVE, MOVE_NOT_AVAILABLE};
pub use screen::{Screen, Snapshot};
pub use tui::run;
pub use ui::draw;
