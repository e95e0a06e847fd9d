//! Immutable game session: history, step pointer and list order.
//!
//! Every transition returns a new session and leaves the receiver intact.

use tracing::{debug, instrument};

use super::{GameStatus, HistoryEntry, MoveError};
use crate::board::{Board, Mark, BOARD_CELLS};
use crate::rules::{self, WinningLine};

/// Complete game session.
///
/// Invariants held by every constructor and transition:
/// - `history` always contains the starting board
/// - `current_step < history.len()`
/// - `history[k]` holds exactly `k` marks, alternating from X
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: Vec<HistoryEntry>,
    current_step: usize,
    sort_ascending: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            sort_ascending: true,
        }
    }

    /// Fresh session with the given move list order
    pub fn with_sort_ascending(sort_ascending: bool) -> Self {
        Self {
            sort_ascending,
            ..Self::new()
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Mark to play next, X on even steps
    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    pub fn winner(&self) -> Option<WinningLine> {
        rules::evaluate(self.current_board())
    }

    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Winner(line)
        } else if rules::is_draw(self.current_board(), self.current_step) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Place the next player's mark at `cell`.
    ///
    /// Entries after the current step are discarded before the new snapshot
    /// is appended.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn try_apply_move(&self, cell: usize) -> Result<GameSession, MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        let board = self.current_board();
        if cell >= BOARD_CELLS {
            return Err(MoveError::OutOfBounds(cell));
        }
        if !board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let mark = self.next_player();
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry::after_move(board.with_mark(cell, mark), cell));
        let current_step = history.len() - 1;

        debug!(%mark, cell, current_step, "Move applied");
        Ok(GameSession {
            history,
            current_step,
            sort_ascending: self.sort_ascending,
        })
    }

    /// Like [`try_apply_move`](Self::try_apply_move), but a refused move
    /// returns the session unchanged.
    pub fn apply_move(&self, cell: usize) -> GameSession {
        self.try_apply_move(cell).unwrap_or_else(|err| {
            debug!(cell, %err, "Move ignored");
            self.clone()
        })
    }

    /// Move the step pointer to an existing history entry.
    ///
    /// History is left untouched; it is only cut when a move is made from
    /// the earlier step.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn try_jump_to(&self, step: usize) -> Result<GameSession, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(step, "Jumped to step");
        Ok(GameSession {
            current_step: step,
            ..self.clone()
        })
    }

    /// Jump to `step`; out-of-range steps leave the session unchanged.
    pub fn jump_to(&self, step: usize) -> GameSession {
        self.try_jump_to(step).unwrap_or_else(|err| {
            debug!(step, %err, "Jump ignored");
            self.clone()
        })
    }

    /// Flip the display order of the move list
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> GameSession {
        GameSession {
            sort_ascending: !self.sort_ascending,
            ..self.clone()
        }
    }
}
