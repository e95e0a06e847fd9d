//! Board snapshots kept for time travel.

use crate::board::{move_label, Board};

/// One snapshot in the game history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Coordinates of the mark that produced this snapshot, empty for the
    /// starting board
    pub label: String,
}

impl HistoryEntry {
    /// Entry for the empty starting board
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            label: String::new(),
        }
    }

    /// Entry produced by placing a mark at `index`
    pub fn after_move(board: Board, index: usize) -> Self {
        Self {
            board,
            label: move_label(index),
        }
    }
}
