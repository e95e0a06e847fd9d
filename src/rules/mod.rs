//! Game rules for tic-tac-toe
//!
//! - Win: three equal marks on one of the 8 fixed lines
//! - Draw: every cell filled without a winning line

pub mod win;

pub use win::{evaluate, is_draw, WinningLine, WINNING_LINES};
