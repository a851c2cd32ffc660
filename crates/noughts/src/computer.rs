//! Deferred computer turns.
//!
//! A scheduled move remembers the session generation it was scheduled
//! under. Starting, resetting or undoing bumps the generation, so a move
//! that wakes up after any of those finds itself stale and does nothing.

use crate::session::{GameSession, SessionState, lock_state};
use noughts_core::{Move, select_move};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};

impl GameSession {
    /// Schedules the computer's move after the configured delay.
    ///
    /// Outside a Tokio runtime there is nothing to defer onto, so the move
    /// is applied immediately.
    pub(crate) fn schedule_computer_move(&self, state: &mut SessionState) {
        let generation = state.generation;
        let delay = *self.config.computer_delay();
        state.computer_pending = true;

        match Handle::try_current() {
            Ok(runtime) => {
                debug!(generation, ?delay, "Scheduling computer move");
                let inner = Arc::clone(&self.inner);
                state.pending = Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    lock_state(&inner).apply_computer_move(generation);
                }));
            }
            Err(_) => {
                warn!("No async runtime available, applying computer move immediately");
                state.apply_computer_move(generation);
            }
        }
    }
}

impl SessionState {
    /// Plays the computer's move if `generation` is still current and the
    /// computer is to move in a live game.
    #[instrument(skip(self), fields(current = self.generation))]
    pub(crate) fn apply_computer_move(&mut self, generation: u64) -> Option<Move> {
        if generation != self.generation {
            warn!("Discarding stale computer move");
            return None;
        }
        self.computer_pending = false;
        self.pending = None;

        let computer = self.computer_to_move()?;
        let difficulty = self
            .settings
            .as_ref()
            .map(|settings| settings.effective_difficulty())
            .unwrap_or_default();

        let index = select_move(
            self.game.board(),
            difficulty,
            computer,
            computer.opponent(),
            &mut self.rng,
        )?;

        match self.game.place(index) {
            Ok(applied) => {
                info!(%applied, %difficulty, "Computer moved");
                let status = *self.game.status();
                if status.is_over() {
                    info!(%status, "Game over");
                }
                Some(applied)
            }
            Err(e) => {
                warn!(error = %e, index, "Computer selected an illegal move");
                None
            }
        }
    }
}
