//! Board representation for tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

/// Board side length (3x3)
pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE; // 9

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark that moves at the given step (X on even steps)
    #[inline]
    pub fn for_step(step: usize) -> Mark {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Content of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Occupied(mark) => Some(mark),
            Cell::Empty => None,
        }
    }
}

/// Column of a cell index in move labels
#[inline]
pub fn column_of(index: usize) -> usize {
    index % BOARD_SIDE
}

/// Row of a cell index in move labels
#[inline]
pub fn row_of(index: usize) -> usize {
    index / BOARD_SIDE
}

/// Cell index drawn at grid position (row, col).
///
/// The grid walks indices column-major, so grid row `r` shows
/// cells `r`, `r + 3` and `r + 6`.
#[inline]
pub fn grid_index(row: usize, col: usize) -> usize {
    row + col * BOARD_SIDE
}

/// Label describing the move that filled `index`, e.g. `"(1,2)"`
pub fn move_label(index: usize) -> String {
    format!("({},{})", column_of(index), row_of(index))
}
