//! Authoritative game state and its transitions.
//!
//! Every transition returns the side effects it wants performed as a list
//! of [`Intent`]s. The engine never touches a clock; the [`Session`] that
//! owns it executes the intents.
//!
//! [`Session`]: super::Session

use tracing::{debug, info};

use super::{
    board::{BOARD_CELLS, Board, Player},
    score::Score,
    verdict::{Verdict, evaluate},
};

/// Side effect requested by a transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Intent {
    AwardWin(Player),
    ScheduleRestart { round: u64 },
    CancelRestart,
}

/// Why a move was ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    OutOfRange,
    Occupied,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied {
        board: Board,
        verdict: Verdict,
        intents: Vec<Intent>,
    },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn intents(&self) -> &[Intent] {
        match self {
            MoveOutcome::Applied { intents, .. } => intents,
            MoveOutcome::Rejected(_) => &[],
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
    score: Score,
    round: u64,
    // Last round whose win has been scored.
    awarded_round: Option<u64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            score: Score::default(),
            round: 0,
            awarded_round: None,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn current_turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    pub fn current_verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    /// Places the current player's mark at `index`.
    ///
    /// Moves on an occupied cell, outside the board, or on a finished board
    /// leave the state untouched. Moving from an earlier point in history
    /// discards the snapshots after it.
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        if index >= BOARD_CELLS {
            return self.reject(index, Rejection::OutOfRange);
        }
        if self.current_verdict().is_terminal() {
            return self.reject(index, Rejection::GameOver);
        }
        if !self.current_board().get(index).is_some_and(|c| c.is_empty()) {
            return self.reject(index, Rejection::Occupied);
        }

        let player = self.current_turn();
        let board = self.current_board().with_move(index, player);

        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;

        let verdict = evaluate(&board);
        info!(round = self.round, %player, index, "move played");

        let intents = match verdict {
            Verdict::Win { player, line } => {
                info!(round = self.round, %player, ?line, "round won");
                let mut intents = Vec::with_capacity(2);
                if self.awarded_round != Some(self.round) {
                    self.awarded_round = Some(self.round);
                    intents.push(Intent::AwardWin(player));
                } else {
                    debug!(round = self.round, "round already scored");
                }
                intents.push(Intent::ScheduleRestart { round: self.round });
                intents
            }
            Verdict::Draw => {
                info!(round = self.round, "round drawn");
                vec![Intent::ScheduleRestart { round: self.round }]
            }
            Verdict::Ongoing => Vec::new(),
        };

        MoveOutcome::Applied {
            board,
            verdict,
            intents,
        }
    }

    /// Clears the board and starts a new round. The score is kept.
    pub fn restart(&mut self) -> Vec<Intent> {
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        self.round += 1;
        info!(round = self.round, "round started");
        vec![Intent::CancelRestart]
    }

    /// Zeroes the score. A pending restart is superseded.
    pub fn reset_score(&mut self) -> Vec<Intent> {
        self.score = Score::default();
        info!("score reset");
        vec![Intent::CancelRestart]
    }

    /// Moves the history pointer without discarding any snapshots. A win
    /// replayed from an earlier snapshot does not score again this round.
    pub fn jump_to(&mut self, move_number: usize) -> Vec<Intent> {
        if move_number >= self.history.len() || move_number == self.current_move {
            return Vec::new();
        }

        let was_terminal = self.current_verdict().is_terminal();
        self.current_move = move_number;
        let is_terminal = self.current_verdict().is_terminal();
        debug!(round = self.round, move_number, "jumped in history");

        match (was_terminal, is_terminal) {
            (true, false) => vec![Intent::CancelRestart],
            (false, true) => vec![Intent::ScheduleRestart { round: self.round }],
            _ => Vec::new(),
        }
    }

    /// Applies the score reducer for a finished round.
    pub fn award_win(&mut self, winner: Player) {
        self.score = self.score.record_win(winner);
        info!(%winner, x = self.score.x, o = self.score.o, "score updated");
    }

    fn reject(&self, index: usize, reason: Rejection) -> MoveOutcome {
        debug!(round = self.round, index, ?reason, "move ignored");
        MoveOutcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    fn play_all(state: &mut GameState, moves: &[usize]) -> Vec<MoveOutcome> {
        moves.iter().map(|&i| state.play_move(i)).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.current_turn(), Player::X);
        assert_eq!(state.current_verdict(), Verdict::Ongoing);
        assert_eq!(state.score(), Score::default());
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn test_turn_alternates_from_x() {
        let mut state = GameState::new();
        let mut turns = vec![state.current_turn()];
        for index in [0, 4, 8, 2] {
            assert!(state.play_move(index).is_applied());
            turns.push(state.current_turn());
        }
        assert_eq!(
            turns,
            vec![Player::X, Player::O, Player::X, Player::O, Player::X]
        );
        assert_eq!(state.current_board().get(4), Some(Cell::Taken(Player::O)));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut state = GameState::new();
        state.play_move(4);
        let board = *state.current_board();
        let history_len = state.history().len();

        let outcome = state.play_move(4);

        assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Occupied));
        assert_eq!(*state.current_board(), board);
        assert_eq!(state.history().len(), history_len);
        assert_eq!(state.current_turn(), Player::O);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = GameState::new();
        assert_eq!(
            state.play_move(9),
            MoveOutcome::Rejected(Rejection::OutOfRange)
        );
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_win_emits_award_and_restart_once() {
        let mut state = GameState::new();
        let outcomes = play_all(&mut state, &[0, 1, 3, 4, 6]);

        assert!(outcomes[..4].iter().all(|o| o.intents().is_empty()));
        assert_eq!(
            outcomes[4].intents(),
            &[
                Intent::AwardWin(Player::X),
                Intent::ScheduleRestart { round: 0 }
            ]
        );
        assert_eq!(
            state.current_verdict(),
            Verdict::Win {
                player: Player::X,
                line: [0, 3, 6]
            }
        );

        // Re-evaluating the finished board does not produce more intents.
        assert_eq!(state.current_verdict().winner(), Some(Player::X));
        assert_eq!(
            state.play_move(8),
            MoveOutcome::Rejected(Rejection::GameOver)
        );
    }

    #[test]
    fn test_draw_schedules_restart_without_award() {
        let mut state = GameState::new();
        // X: 0,1,5,6,8  O: 2,3,4,7
        let outcomes = play_all(&mut state, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

        assert!(outcomes.iter().all(MoveOutcome::is_applied));
        assert_eq!(state.current_verdict(), Verdict::Draw);
        assert_eq!(
            outcomes[8].intents(),
            &[Intent::ScheduleRestart { round: 0 }]
        );
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 3, 4, 6]);
        state.award_win(Player::X);

        let intents = state.restart();

        assert_eq!(intents, vec![Intent::CancelRestart]);
        assert_eq!(state.history(), &[Board::new()]);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.round(), 1);
        assert_eq!(state.score().x, 1);

        state.restart();
        assert_eq!(state.history(), &[Board::new()]);
        assert_eq!(state.current_move(), 0);
    }

    #[test]
    fn test_reset_score_keeps_board() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1]);
        state.award_win(Player::O);

        state.reset_score();

        assert_eq!(state.score(), Score::default());
        assert_eq!(state.current_move(), 2);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_jump_back_then_play_discards_future() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 2]);

        assert!(state.jump_to(1).is_empty());
        assert_eq!(state.current_turn(), Player::O);
        assert_eq!(state.history().len(), 4);

        state.play_move(8);

        assert_eq!(state.history().len(), 3);
        assert_eq!(state.current_move(), 2);
        assert_eq!(
            state.current_board().get(8),
            Some(Cell::Taken(Player::O))
        );
        assert_eq!(state.current_board().get(1), Some(Cell::Empty));
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut state = GameState::new();
        state.play_move(0);
        assert!(state.jump_to(5).is_empty());
        assert_eq!(state.current_move(), 1);
    }

    #[test]
    fn test_rewinning_after_jump_back_scores_once() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 3, 4, 6]);

        for _ in 0..3 {
            state.jump_to(4);
            let outcome = state.play_move(6);
            assert!(outcome.is_applied());
            assert_eq!(
                outcome.intents(),
                &[Intent::ScheduleRestart { round: 0 }]
            );
        }

        // A different winner on a replayed branch is not scored either.
        state.jump_to(4);
        let outcomes = play_all(&mut state, &[2, 7]);
        assert_eq!(state.current_verdict().winner(), Some(Player::O));
        assert_eq!(
            outcomes[1].intents(),
            &[Intent::ScheduleRestart { round: 0 }]
        );

        state.restart();
        let outcomes = play_all(&mut state, &[0, 1, 3, 4, 6]);
        assert_eq!(outcomes[4].intents()[0], Intent::AwardWin(Player::X));
    }

    #[test]
    fn test_jump_across_terminal_snapshot() {
        let mut state = GameState::new();
        play_all(&mut state, &[0, 1, 3, 4, 6]);

        assert_eq!(state.jump_to(3), vec![Intent::CancelRestart]);
        assert_eq!(
            state.jump_to(5),
            vec![Intent::ScheduleRestart { round: 0 }]
        );
    }
}
