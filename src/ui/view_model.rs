//! Pure projection of a [`GameSession`] into what the views draw
//!
//! Nothing here touches egui, so the render inputs can be tested directly.

use crate::board::{grid_index, Cell, BOARD_SIDE};
use crate::game::GameSession;

/// One drawable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Board index sent back when the cell is clicked
    pub index: usize,
    pub cell: Cell,
    /// Part of the winning line
    pub highlighted: bool,
}

/// The 3x3 grid, indexed `[row][col]` in screen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    pub rows: [[CellView; BOARD_SIDE]; BOARD_SIDE],
    pub game_over: bool,
}

impl BoardModel {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.current_board();
        let status = session.status();
        let line = status.winning_line();

        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let index = grid_index(row, col);
                CellView {
                    index,
                    cell: board.get(index).unwrap_or_default(),
                    highlighted: line.is_some_and(|l| l.contains(index)),
                }
            })
        });

        Self {
            rows,
            game_over: status.is_over(),
        }
    }
}

/// One clickable line of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// History index passed to `jump_to`, whatever the display order
    pub step: usize,
    pub description: String,
    pub is_current: bool,
}

/// Status line plus the move list in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryModel {
    pub status: String,
    pub items: Vec<HistoryItem>,
    pub ascending: bool,
}

impl HistoryModel {
    pub fn from_session(session: &GameSession) -> Self {
        let mut items: Vec<HistoryItem> = session
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| HistoryItem {
                step,
                description: describe_step(step, &entry.label),
                is_current: step == session.current_step(),
            })
            .collect();

        if !session.sort_ascending() {
            items.reverse();
        }

        Self {
            status: session.status().to_string(),
            items,
            ascending: session.sort_ascending(),
        }
    }
}

fn describe_step(step: usize, label: &str) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step} {label}")
    }
}
