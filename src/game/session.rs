//! Host runtime for the engine: executes intents and owns the one-shot
//! restart timer.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::engine::{GameState, Intent, MoveOutcome};

pub const DEFAULT_RESTART_DELAY_MS: u64 = 2000;

/// Cancellable handle for a delayed restart of `round`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PendingRestart {
    pub round: u64,
    pub deadline: Instant,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    pending: Option<PendingRestart>,
    restart_delay: Duration,
}

impl Session {
    pub fn new(restart_delay: Duration) -> Self {
        Self {
            state: GameState::new(),
            pending: None,
            restart_delay,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_restart(&self) -> Option<PendingRestart> {
        self.pending
    }

    pub fn play_move(&mut self, index: usize, now: Instant) -> MoveOutcome {
        let outcome = self.state.play_move(index);
        self.execute(outcome.intents(), now);
        outcome
    }

    pub fn restart(&mut self, now: Instant) {
        let intents = self.state.restart();
        self.execute(&intents, now);
    }

    pub fn reset_score(&mut self, now: Instant) {
        let intents = self.state.reset_score();
        self.execute(&intents, now);
    }

    pub fn jump_to(&mut self, move_number: usize, now: Instant) {
        let intents = self.state.jump_to(move_number);
        self.execute(&intents, now);
    }

    /// Fires the pending restart once its deadline has passed.
    ///
    /// A timer left over from an earlier round is discarded without
    /// touching the board. Returns `true` if a restart happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.deadline {
            return false;
        }

        self.pending = None;
        if pending.round != self.state.round() {
            debug!(
                timer_round = pending.round,
                round = self.state.round(),
                "stale restart timer dropped"
            );
            return false;
        }

        info!(round = pending.round, "auto-restart");
        let intents = self.state.restart();
        self.execute(&intents, now);
        true
    }

    /// Time left before the pending restart fires, if any.
    pub fn time_until_restart(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.deadline.saturating_duration_since(now))
    }

    fn execute(&mut self, intents: &[Intent], now: Instant) {
        for intent in intents {
            match *intent {
                Intent::AwardWin(player) => self.state.award_win(player),
                Intent::ScheduleRestart { round } => {
                    let deadline = now + self.restart_delay;
                    debug!(
                        round,
                        delay = ?self.restart_delay,
                        "restart scheduled"
                    );
                    self.pending = Some(PendingRestart { round, deadline });
                }
                Intent::CancelRestart => {
                    if self.pending.take().is_some() {
                        debug!("pending restart cancelled");
                    }
                }
            }
        }
    }
}
