//! Keyboard routing.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app::App;
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q' | 'c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q' | 'Q'), _)
            | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char(c @ '1'..='9'), _) => {
                let index = (c as u8 - b'1') as usize;
                GameHandler::new(self.app).play(index, now);
            }

            (KeyCode::Enter | KeyCode::Char(' '), _) => {
                GameHandler::new(self.app).play_cursor(now);
            }

            (KeyCode::Up | KeyCode::Char('k'), _) => self.app.cursor.up(),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.app.cursor.down(),
            (KeyCode::Left | KeyCode::Char('h'), _) => self.app.cursor.left(),
            (KeyCode::Right | KeyCode::Char('l'), _) => self.app.cursor.right(),

            (KeyCode::Char('r' | 'R'), _) => GameHandler::new(self.app).restart(now),
            (KeyCode::Char('s' | 'S'), _) => GameHandler::new(self.app).reset_score(now),

            (KeyCode::Char('['), _) => GameHandler::new(self.app).step_back(now),
            (KeyCode::Char(']'), _) => GameHandler::new(self.app).step_forward(now),

            _ => {}
        }
        false
    }
}
