//! Key presses mapped to menu commands and move input.

use crate::{View, ViewKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictac_core::StrategyKind;

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game, keeping the strategy.
    NewGame,
    /// Switch the computer strategy.
    Strategy(StrategyKind),
    /// Switch the board view.
    View(ViewKind),
    /// Show or hide the key list.
    ToggleHelp,
    /// Leave the program.
    Quit,
    /// Move the grid cursor with an arrow key.
    Cursor(KeyCode),
    /// Play the cell under the grid cursor.
    PlaceAtCursor,
    /// Play a move written in the active view's format.
    Move(String),
    /// Append a character to the typed move.
    Type(char),
    /// Delete the last typed character.
    Erase,
    /// Play the typed move.
    Submit,
}

/// Key list shown by the help panel.
pub const HELP: &str = "\
n        start a new game
r        computer plays randomly
b        computer blocks your lines
g        grid view: arrows and Enter, or 1-9
c        coordinates view: type `row col`, then Enter
?        show or hide this list
q / Esc  quit";

impl Command {
    /// Maps a key press to a command. Menu keys work in every view; anything
    /// else is handed to the active view.
    pub fn from_key(key: KeyEvent, view: &dyn View) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return (key.code == KeyCode::Char('c')).then_some(Command::Quit);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('n') => Some(Command::NewGame),
            KeyCode::Char('r') => Some(Command::Strategy(StrategyKind::Random)),
            KeyCode::Char('b') => Some(Command::Strategy(StrategyKind::Blocking)),
            KeyCode::Char('g') => Some(Command::View(ViewKind::Grid)),
            KeyCode::Char('c') => Some(Command::View(ViewKind::Coordinates)),
            KeyCode::Char('?') => Some(Command::ToggleHelp),
            code => view.key_command(code),
        }
    }
}
