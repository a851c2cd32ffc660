//! Game session: the one place that owns a match in progress.
//!
//! A [`GameSession`] is a cheap, cloneable handle. Clones share the same
//! state, so a spawned computer turn and the caller see one game.

use crate::config::SessionConfig;
use crate::settings::{GameMode, GameSettings};
use derive_getters::Getters;
use noughts_core::{Board, GameState, GameStatus, Move, Symbol, WinningLine};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Phase {
    /// No game has been started, or the session was reset.
    NotStarted,
    /// A game is being played.
    InProgress,
    /// The game ended in a win or draw; only undo and reset apply.
    Finished,
}

/// Mutable state behind the session lock.
#[derive(Debug)]
pub(crate) struct SessionState {
    pub(crate) game: GameState,
    pub(crate) active: bool,
    pub(crate) settings: Option<GameSettings>,
    /// Bumped whenever a scheduled computer move becomes stale.
    pub(crate) generation: u64,
    pub(crate) rng: StdRng,
    pub(crate) pending: Option<JoinHandle<()>>,
    pub(crate) computer_pending: bool,
}

impl SessionState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            game: GameState::new(),
            active: false,
            settings: None,
            generation: 0,
            rng,
            pending: None,
            computer_pending: false,
        }
    }

    /// Invalidates and aborts any scheduled computer move.
    pub(crate) fn cancel_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.computer_pending = false;
        if let Some(handle) = self.pending.take() {
            debug!(generation = self.generation, "Cancelling scheduled computer move");
            handle.abort();
        }
    }

    /// The computer's symbol when it is the computer's turn in a live game.
    pub(crate) fn computer_to_move(&self) -> Option<Symbol> {
        if !self.active || self.game.status().is_over() {
            return None;
        }
        self.settings
            .as_ref()
            .and_then(GameSettings::computer_symbol)
            .filter(|&symbol| symbol == self.game.to_move())
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: *self.game.board(),
            current_player: self.game.to_move(),
            status: *self.game.status(),
            history: self.game.history().to_vec(),
            active: self.active,
            settings: self.settings.clone(),
            computer_pending: self.computer_pending,
        }
    }
}

/// Shared handle to one game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) inner: Arc<Mutex<SessionState>>,
    pub(crate) config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates an idle session with the default 500 ms computer delay.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates an idle session with explicit pacing and seed.
    #[instrument]
    pub fn with_config(config: SessionConfig) -> Self {
        info!("Creating game session");
        Self {
            inner: Arc::new(Mutex::new(SessionState::new(*config.seed()))),
            config,
        }
    }

    /// Session pacing and seed.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.inner)
    }

    /// Point-in-time copy of everything a front end needs to draw.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Starts a fresh game with `settings`.
    ///
    /// Names and mode-dependent fields are normalized first. Any scheduled
    /// computer move from an earlier game is discarded. When the computer
    /// holds X it is scheduled to open.
    #[instrument(skip(self, settings), fields(mode = %settings.mode()))]
    pub fn start_game(&self, settings: GameSettings) {
        let settings = settings.normalized();
        let mut state = self.lock();

        state.cancel_pending();
        state.game = GameState::new();
        state.active = true;
        info!(
            player = %settings.player1().name(),
            symbol = %settings.player1().symbol(),
            difficulty = ?settings.difficulty(),
            "Game started"
        );
        state.settings = Some(settings);

        if state.computer_to_move().is_some() {
            self.schedule_computer_move(&mut state);
        }
    }

    /// Places the current mover's symbol at `index`.
    ///
    /// Returns the applied move, or `None` when the move is ignored: the
    /// session is idle, the game is over, the cell is taken or out of range,
    /// or it is the computer's turn. After a human move that leaves the
    /// computer to play, its reply is scheduled.
    #[instrument(skip(self))]
    pub fn make_move(&self, index: usize) -> Option<Move> {
        let mut state = self.lock();

        if !state.active {
            warn!("Ignoring move: no game in progress");
            return None;
        }
        if state.computer_to_move().is_some() {
            warn!("Ignoring move: waiting for the computer");
            return None;
        }

        let applied = match state.game.place(index) {
            Ok(applied) => applied,
            Err(e) => {
                warn!(error = %e, "Ignoring move");
                return None;
            }
        };

        let status = *state.game.status();
        if status.is_over() {
            info!(%status, "Game over");
        } else if state.computer_to_move().is_some() {
            self.schedule_computer_move(&mut state);
        }

        Some(applied)
    }

    /// Takes back the last turn.
    ///
    /// Single-player removes two moves (the computer's reply and the human
    /// move before it); two-player modes remove one. A scheduled computer
    /// move is cancelled. If the computer is left to move in a live game,
    /// its move is scheduled again. Returns the number of moves removed.
    #[instrument(skip(self))]
    pub fn undo_move(&self) -> usize {
        let mut state = self.lock();

        if state.game.history().is_empty() {
            debug!("Nothing to undo");
            return 0;
        }

        let count = match state.settings.as_ref().map(GameSettings::mode) {
            Some(GameMode::Single) => 2,
            _ => 1,
        };

        state.cancel_pending();
        let removed = state.game.undo(count);
        info!(removed, remaining = state.game.history().len(), "Undo applied");

        if state.computer_to_move().is_some() {
            self.schedule_computer_move(&mut state);
        }

        removed
    }

    /// Returns the session to its initial idle state.
    ///
    /// The board, history and settings are cleared and any scheduled
    /// computer move is discarded.
    #[instrument(skip(self))]
    pub fn reset_game(&self) {
        let mut state = self.lock();
        state.cancel_pending();
        state.game = GameState::new();
        state.active = false;
        state.settings = None;
        info!("Session reset");
    }

    /// Waits until the currently scheduled computer move has been applied
    /// or discarded. Returns immediately when none is scheduled.
    pub async fn wait_for_computer(&self) {
        let Some(handle) = self.lock().pending.take() else {
            return;
        };
        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => debug!("Scheduled computer move was cancelled"),
            Err(e) => warn!(error = %e, "Computer move task failed"),
        }
    }
}

pub(crate) fn lock_state(inner: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SessionSnapshot {
    /// The board.
    board: Board,
    /// Symbol to move next.
    current_player: Symbol,
    /// Current game status.
    status: GameStatus,
    /// Cell indices in play order.
    history: Vec<usize>,
    /// Whether a game has been started and not reset.
    active: bool,
    /// Settings of the current game.
    settings: Option<GameSettings>,
    /// Whether a computer move is scheduled.
    computer_pending: bool,
}

impl SessionSnapshot {
    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        if !self.active {
            Phase::NotStarted
        } else if self.status.is_over() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        self.status.winner()
    }

    /// Winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }

    /// Whether the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Display name for whoever plays `symbol`.
    pub fn name_for(&self, symbol: Symbol) -> &str {
        self.settings
            .as_ref()
            .map_or(symbol_name(symbol), |s| s.name_for(symbol))
    }

    /// One-line status: winner, draw or whose turn it is.
    pub fn headline(&self) -> String {
        match self.phase() {
            Phase::NotStarted => "No game in progress".to_string(),
            _ => match self.status {
                GameStatus::Won { winner, .. } => format!("{} Wins!", self.name_for(winner)),
                GameStatus::Draw => "It's a Draw!".to_string(),
                GameStatus::InProgress => {
                    format!("{}'s Turn", self.name_for(self.current_player))
                }
            },
        }
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether a human may place at `index` right now.
    pub fn is_playable(&self, index: usize) -> bool {
        let computer_turn = self
            .settings
            .as_ref()
            .and_then(GameSettings::computer_symbol)
            .is_some_and(|symbol| symbol == self.current_player);

        self.phase() == Phase::InProgress && !computer_turn && self.board.is_empty(index)
    }
}

fn symbol_name(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::X => "X",
        Symbol::O => "O",
    }
}
