//! Application state and input routing for the terminal game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{Position, StatisticsStore};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use super::ui::ScreenLayout;
use crate::{CellBindings, GameSession};

/// Main application state.
///
/// Every cell input (click, hotkey, Enter on the cursor) ends up in
/// [`App::activate`], the single handler parameterized by cell.
#[derive(Debug)]
pub struct App<S> {
    session: GameSession<S>,
    bindings: CellBindings,
    cursor: Position,
    viewport: Rect,
    quit: bool,
}

impl<S: StatisticsStore> App<S> {
    /// Creates a new application around a started session.
    pub fn new(session: GameSession<S>, bindings: CellBindings) -> Self {
        Self {
            session,
            bindings,
            cursor: Position::Center,
            viewport: Rect::default(),
            quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// The cell bindings.
    pub fn bindings(&self) -> &CellBindings {
        &self.bindings
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Records the area the last frame was drawn into, for mouse hit-testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Selects the cell at `position`.
    #[instrument(skip(self))]
    pub fn activate(&mut self, position: Position) {
        self.cursor = position;
        if let Some(outcome) = self.session.select_cell(position) {
            debug!(?outcome, "Cell activated");
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset_game(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                // Failure is logged by the session; the grid keeps working.
                let _ = self.session.reset_statistics();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Char(c) => match self.bindings.position_for(c) {
                Some(position) => self.activate(position),
                None => debug!(key = %c, "Unbound key"),
            },
            _ => {}
        }
    }

    /// Handles a mouse event; a left click on a cell selects it.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = ScreenLayout::new(self.viewport);
        match layout.cell_at(mouse.column, mouse.row) {
            Some(position) => self.activate(position),
            None => debug!("Click outside the board"),
        }
    }
}
