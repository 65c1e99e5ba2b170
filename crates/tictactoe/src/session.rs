//! One game engine wired to one statistics store.

use tictactoe_core::{
    GameEngine, MoveError, Outcome, PlaceOutcome, Position, Statistics, StatisticsStore,
    StoreError,
};
use tracing::{debug, info, instrument, warn};

/// Drives a [`GameEngine`] and keeps [`Statistics`] persisted.
///
/// Invalid moves are ignored: they leave the engine, the counters and the
/// message untouched. Terminal outcomes are counted and saved at once.
#[derive(Debug)]
pub struct GameSession<S> {
    engine: GameEngine,
    stats: Statistics,
    store: S,
    message: String,
}

impl<S: StatisticsStore> GameSession<S> {
    /// Starts a session, loading the counters once from `store`.
    ///
    /// A load failure is logged and the counters start at zero.
    #[instrument(skip(store))]
    pub fn start(store: S) -> Self {
        let stats = match store.load() {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "Failed to load statistics, starting from zero");
                Statistics::default()
            }
        };
        info!(total_games = stats.total_games(), "Session started");
        Self {
            engine: GameEngine::new(),
            stats,
            store,
            message: String::new(),
        }
    }

    /// Handles a selection of the cell at `position`.
    ///
    /// Returns the engine's report, or `None` if the move was ignored.
    #[instrument(skip(self), fields(player = %self.engine.active_player()))]
    pub fn select_cell(&mut self, position: Position) -> Option<PlaceOutcome> {
        match self.engine.place_mark(position) {
            Ok(outcome) => {
                self.apply(outcome);
                Some(outcome)
            }
            Err(e) => {
                self.ignore(e);
                None
            }
        }
    }

    /// Handles a selection by raw cell index (0-8).
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> Option<PlaceOutcome> {
        match Position::from_index(index) {
            Some(position) => self.select_cell(position),
            None => {
                self.ignore(MoveError::OutOfBounds(index));
                None
            }
        }
    }

    /// Starts a new game and clears the message. Statistics are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.engine.reset();
        self.message.clear();
    }

    /// Zeroes the counters and persists them immediately.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if saving fails; the in-memory counters are
    /// zeroed either way.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) -> Result<(), StoreError> {
        self.stats.reset();
        info!("Statistics reset");
        self.persist()
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current counters.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The status message for the last accepted placement.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text of the cell at `position`: `""`, `"X"` or `"O"`.
    pub fn cell_text(&self, position: Position) -> &'static str {
        self.engine.board().get(position).label()
    }

    /// The three-line statistics summary.
    pub fn statistics_text(&self) -> String {
        self.stats.summary()
    }

    fn apply(&mut self, outcome: PlaceOutcome) {
        self.message = match outcome {
            PlaceOutcome::Continue { next } => format!("Player {}'s turn", next),
            PlaceOutcome::Win(player) => Outcome::Win(player).to_string(),
            PlaceOutcome::Draw => Outcome::Draw.to_string(),
        };

        if let Some(terminal) = outcome.terminal() {
            self.stats.record(terminal);
            // Already logged; the count stays in memory for the next save.
            let _ = self.persist();
        }
    }

    fn ignore(&self, reason: MoveError) {
        debug!(%reason, "Move ignored");
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        match self.store.save(&self.stats) {
            Ok(()) => {
                info!(
                    x_wins = self.stats.x_wins(),
                    o_wins = self.stats.o_wins(),
                    draws = self.stats.draws(),
                    "Statistics persisted"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist statistics");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{MemoryStore, Player};

    fn play(session: &mut GameSession<MemoryStore>, indices: &[usize]) {
        for &i in indices {
            session.select_index(i);
        }
    }

    #[test]
    fn test_start_loads_existing_counters() {
        let store = MemoryStore::with_statistics(&Statistics::new(2, 3, 4));
        let session = GameSession::start(store);
        assert_eq!(session.statistics(), &Statistics::new(2, 3, 4));
        assert_eq!(session.message(), "");
    }

    #[test]
    fn test_continue_message_names_next_player() {
        let mut session = GameSession::start(MemoryStore::new());
        assert_eq!(
            session.select_cell(Position::Center),
            Some(PlaceOutcome::Continue { next: Player::O })
        );
        assert_eq!(session.message(), "Player O's turn");
        assert_eq!(session.cell_text(Position::Center), "X");
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_win_counts_and_saves_once() {
        let mut session = GameSession::start(MemoryStore::new());
        play(&mut session, &[0, 3, 1, 4, 2]);

        assert_eq!(session.message(), "Player X wins!");
        assert_eq!(session.statistics(), &Statistics::new(1, 0, 0));
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().load().unwrap(), Statistics::new(1, 0, 0));
    }

    #[test]
    fn test_draw_counts_and_saves() {
        let mut session = GameSession::start(MemoryStore::new());
        play(&mut session, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

        assert_eq!(session.message(), "It's a draw!");
        assert_eq!(*session.statistics().draws(), 1);
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_ignored_moves_change_nothing() {
        let mut session = GameSession::start(MemoryStore::new());
        session.select_cell(Position::Center);
        let message = session.message().to_string();
        let engine = session.engine().clone();

        assert_eq!(session.select_cell(Position::Center), None);
        assert_eq!(session.select_index(12), None);
        assert_eq!(session.engine(), &engine);
        assert_eq!(session.message(), message);
    }

    #[test]
    fn test_clicks_after_game_over_do_not_recount() {
        let mut session = GameSession::start(MemoryStore::new());
        play(&mut session, &[0, 3, 1, 4, 2, 5, 8]);
        assert_eq!(session.statistics(), &Statistics::new(1, 0, 0));
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_reset_game_keeps_statistics() {
        let mut session = GameSession::start(MemoryStore::new());
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset_game();

        assert!(session.engine().is_active());
        assert_eq!(session.engine().active_player(), Player::X);
        assert_eq!(session.message(), "");
        assert_eq!(session.statistics(), &Statistics::new(1, 0, 0));
    }

    #[test]
    fn test_reset_statistics_zeroes_and_persists() {
        let store = MemoryStore::with_statistics(&Statistics::new(9, 8, 7));
        let mut session = GameSession::start(store);
        session.reset_statistics().unwrap();

        assert_eq!(session.statistics(), &Statistics::default());
        assert_eq!(session.store().load().unwrap(), Statistics::default());
        assert_eq!(
            session.statistics_text(),
            "Player X Wins: 0\nPlayer O Wins: 0\nDraws: 0"
        );
    }
}
