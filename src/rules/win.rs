//! Win and draw detection
//!
//! Lines are scanned in a fixed priority order: rows top to bottom,
//! columns left to right, then the two diagonals. The first complete
//! line wins, so a board holding two lines always reports the same one.

use crate::board::{Board, Cell, Mark, BOARD_CELLS};

/// The 8 winning triples, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// A completed line and the mark that completed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub cells: [usize; 3],
    pub mark: Mark,
}

impl WinningLine {
    /// Check whether a cell index belongs to this line
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Find the first completed line on the board.
///
/// Returns `None` for a full board without a winner as well; use
/// [`is_draw`] to tell a draw apart from a game in progress.
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let first = board.get(a)?;
        let complete = board.get(b) == Some(first) && board.get(c) == Some(first);
        match first {
            Cell::Occupied(mark) if complete => Some(WinningLine {
                cells: [a, b, c],
                mark,
            }),
            _ => None,
        }
    })
}

/// Draw check: all cells played and no line completed.
///
/// `moves` is the history step of `board`. Moves are never retracted on a
/// snapshot, so the move count reaching the board size means every cell is
/// filled.
pub fn is_draw(board: &Board, moves: usize) -> bool {
    moves == BOARD_CELLS && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(i, mark)| board.with_mark(i, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|i| (i, Mark::O)));
            let found = evaluate(&board).expect("line should win");
            assert_eq!(found.cells, line);
            assert_eq!(found.mark, Mark::O);
        }
    }

    #[test]
    fn test_mixed_line_not_winner() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_incomplete_line_not_winner() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_row_reported_before_diagonal() {
        // X holds both the top row and the 0-4-8 diagonal
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&board).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = board_with(&[
            (2, Mark::O),
            (5, Mark::O),
            (8, Mark::O),
            (4, Mark::O),
            (6, Mark::O),
        ]);
        assert_eq!(evaluate(&board).map(|l| l.cells), Some([2, 5, 8]));
    }

    #[test]
    fn test_winning_line_contains() {
        let line = WinningLine {
            cells: [2, 4, 6],
            mark: Mark::X,
        };
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X:0,1,5,6,8  O:2,3,4,7
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (5, Mark::X),
            (6, Mark::X),
            (8, Mark::X),
            (2, Mark::O),
            (3, Mark::O),
            (4, Mark::O),
            (7, Mark::O),
        ]);
        assert_eq!(evaluate(&board), None);
        assert!(is_draw(&board, 9));
    }

    #[test]
    fn test_win_on_last_move_is_not_draw() {
        let board = board_with(&[
            (0, Mark::X),
            (2, Mark::O),
            (1, Mark::X),
            (3, Mark::O),
            (5, Mark::X),
            (6, Mark::O),
            (4, Mark::X),
            (7, Mark::O),
            (8, Mark::X),
        ]);
        assert!((0..BOARD_CELLS).all(|i| !board.is_empty(i)));
        assert!(evaluate(&board).is_some());
        assert!(!is_draw(&board, 9));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = board_with(&[(0, Mark::X)]);
        assert!(!is_draw(&board, 1));
    }
}
