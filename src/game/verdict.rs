//! Win/draw detection over a single board snapshot.

use tracing::instrument;

use super::board::{Board, Cell, Player};

/// Rows, then columns, then diagonals. The first complete line in this
/// order decides the winner.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ongoing,
    Win { player: Player, line: [usize; 3] },
    Draw,
}

impl Verdict {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    /// Whether `index` is part of the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        match self {
            Verdict::Win { line, .. } => line.contains(&index),
            _ => false,
        }
    }
}

#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Verdict {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        if cells[a] != cells[b] || cells[a] != cells[c] {
            continue;
        }
        if let Cell::Taken(player) = cells[a] {
            return Verdict::Win { player, line };
        }
    }

    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
