use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::Local;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), msg);
        let mut buf = self.lock();
        buf.push_back(line);
        while buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    // A panic while holding the lock leaves the lines intact.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard-selected cell on the 3x3 grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.row = (self.row + 1).min(2);
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.col = (self.col + 1).min(2);
    }
}
