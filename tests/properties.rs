//! Property-based tests for the session transitions and winner scan.

use proptest::prelude::*;
use tictactoe::rules::WINNING_LINES;
use tictactoe::{evaluate, Board, GameSession, Mark, BOARD_CELLS};

// =============================================================================
// Strategies
// =============================================================================

/// Any board, legal or not
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0u8..3, BOARD_CELLS).prop_map(|cells| {
        cells
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (i, &c)| match c {
                1 => board.with_mark(i, Mark::X),
                2 => board.with_mark(i, Mark::O),
                _ => board,
            })
    })
}

/// Session reached by a random click sequence, including jumps and toggles
fn arb_session() -> impl Strategy<Value = GameSession> {
    proptest::collection::vec((0u8..3, 0usize..12), 0..30).prop_map(|actions| {
        actions
            .into_iter()
            .fold(GameSession::new(), |session, (kind, n)| match kind {
                0 | 1 => session.apply_move(n),
                _ => session.jump_to(n),
            })
    })
}

fn marks_placed(board: &Board) -> usize {
    (0..BOARD_CELLS).filter(|&i| !board.is_empty(i)).count()
}

fn count(board: &Board, mark: Mark) -> usize {
    (0..BOARD_CELLS)
        .filter(|&i| board.get(i).and_then(|c| c.mark()) == Some(mark))
        .count()
}

fn uniform_line(board: &Board) -> bool {
    WINNING_LINES.iter().any(|&[a, b, c]| {
        let first = board.get(a).and_then(|cell| cell.mark());
        first.is_some()
            && board.get(b).and_then(|cell| cell.mark()) == first
            && board.get(c).and_then(|cell| cell.mark()) == first
    })
}

proptest! {
    #[test]
    fn evaluate_none_without_uniform_line(board in arb_board()) {
        prop_assert_eq!(evaluate(&board).is_some(), uniform_line(&board));
    }

    #[test]
    fn evaluated_line_is_uniform(board in arb_board()) {
        if let Some(line) = evaluate(&board) {
            for i in line.cells {
                prop_assert_eq!(board.get(i).and_then(|c| c.mark()), Some(line.mark));
            }
        }
    }

    #[test]
    fn session_invariants_hold(session in arb_session()) {
        prop_assert!(!session.history().is_empty());
        prop_assert!(session.current_step() < session.history().len());
        for (step, entry) in session.history().iter().enumerate() {
            prop_assert_eq!(marks_placed(&entry.board), step);
            prop_assert_eq!(count(&entry.board, Mark::X), step.div_ceil(2));
        }
    }

    #[test]
    fn later_entries_only_add_marks(session in arb_session()) {
        for pair in session.history().windows(2) {
            for i in 0..BOARD_CELLS {
                if let Some(mark) = pair[0].board.get(i).and_then(|c| c.mark()) {
                    prop_assert_eq!(pair[1].board.get(i).and_then(|c| c.mark()), Some(mark));
                }
            }
        }
    }

    #[test]
    fn successful_move_adds_one_mark(session in arb_session(), cell in 0usize..BOARD_CELLS) {
        if let Ok(next) = session.try_apply_move(cell) {
            prop_assert_eq!(next.current_step(), session.current_step() + 1);
            prop_assert_eq!(
                marks_placed(next.current_board()),
                marks_placed(session.current_board()) + 1
            );
            prop_assert_eq!(next.history().len(), session.current_step() + 2);
        }
    }

    #[test]
    fn illegal_move_is_noop(session in arb_session(), cell in 0usize..BOARD_CELLS) {
        let occupied = !session.current_board().is_empty(cell);
        if occupied || session.winner().is_some() {
            prop_assert_eq!(session.apply_move(cell), session);
        }
    }

    #[test]
    fn next_player_follows_step_parity(session in arb_session(), step in 0usize..10) {
        let jumped = session.jump_to(step);
        if step < session.history().len() {
            prop_assert_eq!(jumped.current_step(), step);
            prop_assert_eq!(jumped.next_player() == Mark::X, step % 2 == 0);
            prop_assert_eq!(jumped.history(), session.history());
        } else {
            prop_assert_eq!(jumped, session);
        }
    }

    #[test]
    fn toggle_only_changes_order(session in arb_session()) {
        let toggled = session.toggle_sort_order();
        prop_assert_eq!(toggled.history(), session.history());
        prop_assert_eq!(toggled.current_step(), session.current_step());
        prop_assert_eq!(toggled.next_player(), session.next_player());
        prop_assert_ne!(toggled.sort_ascending(), session.sort_ascending());
    }
}
