//! End-to-end rounds through the public game API.

use std::time::{Duration, Instant};

use tic_tac_tally::game::{
    Board, GameState, MoveOutcome, Player, Rejection, Score, Session, Verdict, WINNING_LINES,
    evaluate,
};

const DELAY: Duration = Duration::from_millis(2000);

fn play(session: &mut Session, moves: &[usize], now: Instant) {
    for &index in moves {
        assert!(
            session.play_move(index, now).is_applied(),
            "move {index} should be accepted"
        );
    }
}

#[test]
fn test_diagonal_near_miss_is_ongoing() {
    // X on 0,4,2 and O on 1,5.
    let board = Board::from_placements(&[
        (0, Player::X),
        (1, Player::O),
        (4, Player::X),
        (5, Player::O),
        (2, Player::X),
    ]);
    assert_eq!(evaluate(&board), Verdict::Ongoing);
}

#[test]
fn test_column_win_scores_and_schedules_restart() {
    let start = Instant::now();
    let mut session = Session::new(DELAY);

    play(&mut session, &[0, 1, 3, 4, 6], start);

    assert_eq!(
        session.state().current_verdict(),
        Verdict::Win {
            player: Player::X,
            line: [0, 3, 6]
        }
    );
    assert_eq!(session.state().score(), Score { x: 1, o: 0 });
    assert!(session.pending_restart().is_some());

    // Repeated evaluation of the finished board never adds to the score.
    for _ in 0..3 {
        let _ = session.state().current_verdict();
        session.tick(start + Duration::from_millis(10));
    }
    assert_eq!(session.state().score(), Score { x: 1, o: 0 });

    assert!(session.tick(start + DELAY));
    assert_eq!(session.state().history(), &[Board::new()]);
    assert_eq!(session.state().current_turn(), Player::X);
}

#[test]
fn test_full_board_draw_keeps_score() {
    let start = Instant::now();
    let mut session = Session::new(DELAY);

    // X: 0,1,5,6,8  O: 2,3,4,7
    play(&mut session, &[0, 2, 1, 3, 5, 4, 6, 7, 8], start);

    assert_eq!(session.state().current_verdict(), Verdict::Draw);
    assert_eq!(session.state().score(), Score::default());
    assert!(session.pending_restart().is_some());
}

#[test]
fn test_moves_after_game_end_are_ignored() {
    let mut state = GameState::new();
    for index in [0, 1, 3, 4, 6] {
        state.play_move(index);
    }
    let board = *state.current_board();

    assert_eq!(
        state.play_move(8),
        MoveOutcome::Rejected(Rejection::GameOver)
    );
    assert_eq!(*state.current_board(), board);
}

#[test]
fn test_stale_restart_does_not_touch_next_round() {
    let start = Instant::now();
    let mut session = Session::new(DELAY);
    play(&mut session, &[0, 1, 3, 4, 6], start);

    session.restart(start + Duration::from_millis(300));
    play(&mut session, &[4, 0], start + Duration::from_millis(400));

    assert!(!session.tick(start + DELAY));
    assert_eq!(session.state().current_move(), 2);
    assert_eq!(session.state().round(), 1);
}

#[test]
fn test_score_accumulates_across_rounds() {
    let mut now = Instant::now();
    let mut session = Session::new(DELAY);

    // X wins the left column, then O wins the middle column.
    play(&mut session, &[0, 1, 3, 4, 6], now);
    now += DELAY;
    assert!(session.tick(now));

    play(&mut session, &[0, 1, 2, 4, 8, 7], now);
    assert_eq!(session.state().current_verdict().winner(), Some(Player::O));
    now += DELAY;
    assert!(session.tick(now));

    assert_eq!(session.state().score(), Score { x: 1, o: 1 });

    session.reset_score(now);
    assert_eq!(session.state().score(), Score::default());
    assert_eq!(session.state().history().len(), 1);
}

#[test]
fn test_single_line_boards_report_their_owner() {
    for line in WINNING_LINES {
        let placements: Vec<(usize, Player)> = line.iter().map(|&i| (i, Player::O)).collect();
        let board = Board::from_placements(&placements);
        assert_eq!(
            evaluate(&board),
            Verdict::Win {
                player: Player::O,
                line
            }
        );
    }
}
