use std::{
    fmt::Display,
    io::Stdout,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::game::Session;

use super::{
    handlers::{GameHandler, InputHandler},
    types::{Cursor, LogBuffer},
};

/// How often the screen refreshes while idle, so the restart countdown moves.
const FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state container.
pub struct App {
    pub(in crate::ui) session: Session,
    pub(in crate::ui) cursor: Cursor,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(restart_delay: Duration, logs: LogBuffer) -> Self {
        Self {
            session: Session::new(restart_delay),
            cursor: Cursor::default(),
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.log("UI started");

        loop {
            GameHandler::new(self).tick(Instant::now());

            terminal
                .draw(|f| self.draw(f))
                .context("failed to draw frame")?;

            if !event::poll(self.poll_timeout(Instant::now()))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if InputHandler::new(self).handle_key(key, Instant::now()) {
                    return Ok(());
                }
            }
        }
    }

    /// Waits no longer than the next frame or the pending restart.
    pub(in crate::ui) fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .time_until_restart(now)
            .map_or(FRAME_INTERVAL, |left| left.min(FRAME_INTERVAL))
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
