//! Core game state: board snapshots, verdicts, score tally and the
//! restart timer that drives the round lifecycle.

mod board;
mod engine;
mod score;
mod session;
mod verdict;

pub use board::{BOARD_CELLS, Board, Cell, Player};
pub use engine::{GameState, Intent, MoveOutcome, Rejection};
pub use score::Score;
pub use session::{DEFAULT_RESTART_DELAY_MS, PendingRestart, Session};
pub use verdict::{Verdict, WINNING_LINES, evaluate};
