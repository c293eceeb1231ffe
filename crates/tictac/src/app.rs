//! Application state and logic.

use crate::input::move_cursor;
use crate::{Command, Config, Scene, Screen, Snapshot, ViewKind, ViewRenderer};
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use tictac_core::{Coord, GameError, GameState, SharedGame, StrategyKind, SubscriptionId};
use tracing::{debug, info, instrument, warn};

/// Shown for input the view cannot parse and for cells off the board.
pub const INVALID_MOVE: &str = "Invalid move";
/// Shown when the chosen cell is taken.
pub const MOVE_NOT_AVAILABLE: &str = "Move not available";
/// Shown for moves after a win or tie.
pub const GAME_OVER: &str = "Game is over, press n for a new game";

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next key.
    Continue,
    /// Stop.
    Quit,
}

/// Main application state.
///
/// Exactly one [`ViewRenderer`] is subscribed to the game at a time.
#[derive(Debug)]
pub struct App {
    game: SharedGame,
    screen: Screen,
    view: ViewKind,
    renderer: SubscriptionId,
    seed: Option<u64>,
    cursor: Coord,
    input: String,
    show_help: bool,
}

impl App {
    /// Creates the application with the configured strategy and view.
    #[instrument(skip(config), fields(strategy = %config.strategy(), view = %config.view()))]
    pub fn new(config: &Config) -> Self {
        let seed = *config.seed();
        let game = SharedGame::new(GameState::new(config.strategy().build(seed)));
        let screen = Screen::new();
        let view = *config.view();
        let renderer = Self::attach(&game, view, &screen);
        info!("Application created");

        Self {
            game,
            screen,
            view,
            renderer,
            seed,
            cursor: Coord::CENTER,
            input: String::new(),
            show_help: false,
        }
    }

    /// Subscribes a renderer for `view` and brings the screen up to date.
    fn attach(game: &SharedGame, view: ViewKind, screen: &Screen) -> SubscriptionId {
        let renderer = ViewRenderer::new(view, screen.clone());
        game.with(|state| renderer.refresh(state));
        game.subscribe(renderer)
    }

    /// The game being played.
    pub fn game(&self) -> &SharedGame {
        &self.game
    }

    /// What the active view last reported.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The active view.
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Highlighted cell in the grid view.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Move typed so far in the coordinates view.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the key list replaces the board.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Name of the computer's strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.game.with(|state| state.strategy().name())
    }

    /// Drawing inputs for the active view.
    pub fn scene<'a>(&'a self, snapshot: &'a Snapshot) -> Scene<'a> {
        Scene {
            snapshot,
            cursor: self.cursor,
            input: &self.input,
        }
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// A computer player that cannot move while the game is still running.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Flow> {
        let Some(command) = Command::from_key(key, self.view.view()) else {
            return Ok(Flow::Continue);
        };
        debug!(?command, "Handling command");

        match command {
            Command::NewGame => {
                self.input.clear();
                self.game.reset();
            }
            Command::Strategy(kind) => self.switch_strategy(kind),
            Command::View(kind) => self.switch_view(kind),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Quit => return Ok(Flow::Quit),
            Command::Cursor(code) => self.cursor = move_cursor(self.cursor, code),
            Command::PlaceAtCursor => self.play(self.cursor)?,
            Command::Move(text) => self.play_text(&text)?,
            Command::Type(c) => self.input.push(c),
            Command::Erase => {
                self.input.pop();
            }
            Command::Submit => {
                let text = std::mem::take(&mut self.input);
                self.play_text(&text)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn play_text(&mut self, text: &str) -> Result<()> {
        match self.view.view().parse_move(text) {
            Ok(coord) => self.play(coord),
            Err(e) => {
                debug!(error = %e, "Unparsable move");
                self.screen.set_message(INVALID_MOVE);
                Ok(())
            }
        }
    }

    fn play(&mut self, coord: Coord) -> Result<()> {
        match self.game.play_turn(coord) {
            Ok(turn) => {
                debug!(?turn, "Turn played");
                Ok(())
            }
            Err(GameError::OutOfBounds { .. }) => {
                self.screen.set_message(INVALID_MOVE);
                Ok(())
            }
            Err(GameError::OccupiedCell { .. }) => {
                self.screen.set_message(MOVE_NOT_AVAILABLE);
                Ok(())
            }
            Err(GameError::GameOver) => {
                self.screen.set_message(GAME_OVER);
                Ok(())
            }
            Err(e @ GameError::NoMovesAvailable) => {
                warn!(error = %e, "Computer could not reply");
                Err(e).context("Computer player has no move on a running game")
            }
        }
    }

    fn switch_strategy(&mut self, kind: StrategyKind) {
        self.game.set_strategy(kind.build(self.seed));
        self.screen.set_message(format!("Computer strategy: {kind}"));
    }

    fn switch_view(&mut self, kind: ViewKind) {
        if kind == self.view {
            return;
        }
        self.game.unsubscribe(self.renderer);
        self.renderer = Self::attach(&self.game, kind, &self.screen);
        info!(from = %self.view, to = %kind, "View changed");
        self.view = kind;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app(strategy: StrategyKind, view: ViewKind) -> App {
        let config = Config::default().with_overrides(Some(strategy), Some(view), Some(7));
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_quit_stops() {
        let mut app = app(StrategyKind::Random, ViewKind::Grid);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn test_unmapped_key_changes_nothing() {
        let mut app = app(StrategyKind::Random, ViewKind::Grid);
        let before = app.screen().snapshot();
        assert_eq!(press(&mut app, KeyCode::Char('z')), Flow::Continue);
        assert_eq!(app.screen().snapshot(), before);
    }

    #[test]
    fn test_switching_view_replaces_renderer() {
        let mut app = app(StrategyKind::Blocking, ViewKind::Grid);
        let grid_renderer = app.renderer;

        press(&mut app, KeyCode::Char('c'));
        assert!(!app.game().unsubscribe(grid_renderer));
        assert_eq!(app.screen().snapshot().message(), "New game. You are X.");

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('1'));

        assert_eq!(app.view(), ViewKind::Grid);
        assert_eq!(app.screen().snapshot().message(), "O played 5");
    }

    #[test]
    fn test_strategy_switch_keeps_board() {
        let mut app = app(StrategyKind::Random, ViewKind::Grid);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('b'));

        assert_eq!(app.screen().snapshot().message(), "Computer strategy: blocking");
        assert_eq!(app.game().board().remaining_cells(), 7);
        assert_eq!(app.strategy_name(), "blocking");
    }

    #[test]
    fn test_view_switch_clears_typed_text() {
        let mut app = app(StrategyKind::Random, ViewKind::Coordinates);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.input(), "");
    }
}
