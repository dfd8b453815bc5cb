//! Game state transitions driven from the UI.

use std::time::Instant;

use crate::game::{MoveOutcome, Rejection, Verdict};

use super::super::app::App;

/// Helper struct for applying player actions to the session and logging them.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn play(&mut self, index: usize, now: Instant) {
        let player = self.app.session.state().current_turn();

        match self.app.session.play_move(index, now) {
            MoveOutcome::Applied { verdict, .. } => {
                self.app.log(format!("{} played cell {}", player, index + 1));
                match verdict {
                    Verdict::Win { player, .. } => {
                        let score = self.app.session.state().score();
                        self.app.log(format!(
                            "{} wins! Score X {} - O {}",
                            player, score.x, score.o
                        ));
                    }
                    Verdict::Draw => self.app.log("Draw!"),
                    Verdict::Ongoing => {}
                }
            }
            MoveOutcome::Rejected(reason) => {
                let msg = match reason {
                    Rejection::OutOfRange => format!("No cell {}", index + 1),
                    Rejection::Occupied => format!("Cell {} is taken", index + 1),
                    Rejection::GameOver => "Round is over".to_string(),
                };
                self.app.log(format!("Move ignored: {}", msg));
            }
        }
    }

    pub fn play_cursor(&mut self, now: Instant) {
        let index = self.app.cursor.index();
        self.play(index, now);
    }

    pub fn restart(&mut self, now: Instant) {
        self.app.session.restart(now);
        self.app.log("Game restarted");
    }

    pub fn reset_score(&mut self, now: Instant) {
        self.app.session.reset_score(now);
        self.app.log("Score reset");
    }

    pub fn step_back(&mut self, now: Instant) {
        let current = self.app.session.state().current_move();
        if current == 0 {
            return;
        }
        self.app.session.jump_to(current - 1, now);
        self.app.log(format!("Viewing move {}", current - 1));
    }

    pub fn step_forward(&mut self, now: Instant) {
        let state = self.app.session.state();
        let next = state.current_move() + 1;
        if next >= state.history().len() {
            return;
        }
        self.app.session.jump_to(next, now);
        self.app.log(format!("Viewing move {}", next));
    }

    /// Fires a due auto-restart.
    pub fn tick(&mut self, now: Instant) {
        if self.app.session.tick(now) {
            self.app.log("New round");
        }
    }
}
