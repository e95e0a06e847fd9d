//! Refused transitions.

use derive_more::{Display, Error};

/// Reason a transition was refused.
///
/// Refusals are never shown to the player; the session stays unchanged and
/// the reason is only traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The current snapshot already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The target cell holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),

    /// The target cell is not on the board.
    #[display("Cell {_0} is out of bounds")]
    OutOfBounds(#[error(not(source))] usize),

    /// The requested step is not in the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },
}
