//! Interchangeable board views.
//!
//! A view decides which keys enter a move, how a typed move is parsed and how
//! the board is drawn. The active view's [`ViewRenderer`] is the game's only
//! observer and refreshes the [`Screen`] after every change.

mod coordinates;
mod grid;

pub use coordinates::CoordinateView;
pub use grid::GridView;

use crate::{Command, Screen, Snapshot};
use crossterm::event::KeyCode;
use derive_more::{Display, Error};
use ratatui::Frame;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use tictac_core::{BOARD_SIZE, Coord, GameState, Observer};
use tracing::trace;

/// Input that a view could not turn into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// A field was not a non-negative integer.
    #[display("'{input}' is not a number")]
    NotANumber {
        /// The offending text.
        input: String,
    },

    /// Wrong number of fields.
    #[display("expected {expected} number(s), got {found}")]
    WrongArity {
        /// Fields the view expects.
        expected: usize,
        /// Fields supplied.
        found: usize,
    },

    /// Cell number outside 1-9.
    #[display("cell {value} does not exist")]
    NoSuchCell {
        /// The rejected number.
        value: usize,
    },
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Game as last reported to the view.
    pub snapshot: &'a Snapshot,
    /// Highlighted cell in the grid view.
    pub cursor: Coord,
    /// Move typed so far in the coordinates view.
    pub input: &'a str,
}

/// A way of showing the board and reading moves.
pub trait View: Send + Sync {
    /// Title of the board panel.
    fn title(&self) -> &'static str;

    /// Key hint for entering a move.
    fn hint(&self) -> &'static str;

    /// Parses a move written in this view's format.
    ///
    /// Bounds are left to the game, so out-of-range coordinates parse successfully.
    fn parse_move(&self, input: &str) -> Result<Coord, InputError>;

    /// How this view names a cell in status messages.
    fn cell_label(&self, coord: Coord) -> String;

    /// Command for a key that is not a menu key.
    fn key_command(&self, key: KeyCode) -> Option<Command>;

    /// Draws the board into `area`.
    fn draw(&self, frame: &mut Frame, area: Rect, scene: &Scene<'_>);

    /// Status-bar line for a freshly recorded snapshot.
    fn describe(&self, snapshot: &Snapshot) -> String {
        let status = snapshot.status;
        if status.is_terminal() {
            return format!("{status}. Press n for a new game.");
        }
        match snapshot.last_move {
            Some((coord, mark)) => format!("{mark} played {}", self.cell_label(coord)),
            None if snapshot.board.remaining_cells() == BOARD_SIZE * BOARD_SIZE => {
                "New game. You are X.".to_string()
            }
            None => "Your move.".to_string(),
        }
    }
}

/// Selectable views, by name.
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
pub enum ViewKind {
    /// Cursor grid, one keypress per move.
    #[default]
    #[strum(to_string = "grid", serialize = "button")]
    #[serde(alias = "button")]
    Grid,
    /// Row and column typed into a text field.
    #[strum(to_string = "coordinates", serialize = "text")]
    #[serde(alias = "text")]
    Coordinates,
}

impl ViewKind {
    /// The view implementation.
    pub fn view(self) -> &'static dyn View {
        match self {
            ViewKind::Grid => &GridView,
            ViewKind::Coordinates => &CoordinateView,
        }
    }
}

/// Observer that refreshes the screen with one view's wording.
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    kind: ViewKind,
    screen: Screen,
}

impl ViewRenderer {
    /// Creates a renderer writing to `screen`.
    pub fn new(kind: ViewKind, screen: Screen) -> Self {
        Self { kind, screen }
    }

    /// Records the game's board and status on the screen.
    pub fn refresh(&self, game: &GameState) {
        let view = self.kind.view();
        self.screen.update(|snapshot| {
            snapshot.record(game.board(), game.status());
            snapshot.message = view.describe(snapshot);
            trace!(view = %self.kind, message = %snapshot.message, "Screen refreshed");
        });
    }
}

impl Observer for ViewRenderer {
    fn on_change(&mut self, game: &GameState) {
        self.refresh(game);
    }
}

/// Parses a non-negative integer field.
fn parse_number(field: &str) -> Result<usize, InputError> {
    field.parse().map_err(|_| InputError::NotANumber {
        input: field.to_string(),
    })
}
