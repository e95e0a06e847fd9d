//! Board snapshot

use super::{Cell, Mark, BOARD_CELLS};

/// One immutable board snapshot.
///
/// Placing a mark produces a new board; a snapshot stored in history is
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Get cell at index, `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if the cell at index is empty (out of range is never empty)
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Copy of this board with `mark` placed at `index`.
    ///
    /// Callers check bounds and emptiness first.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(index < BOARD_CELLS);
        debug_assert!(self.is_empty(index));
        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(mark);
        next
    }
}
