//! Game status shown above the move list.

use derive_more::Display;

use crate::board::Mark;
use crate::rules::WinningLine;

/// Status line shown above the move list, derived on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("Winner: {}", _0.mark)]
    Winner(WinningLine),
    #[display("Draw")]
    Draw,
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Winner(line) => Some(*line),
            _ => None,
        }
    }
}
