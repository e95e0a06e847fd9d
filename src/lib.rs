//! Tic-tac-toe with time travel
//!
//! A 3x3 game for two players sharing one screen:
//! - X moves first, turns alternate
//! - Three equal marks on a row, column or diagonal win
//! - A full board without a line is a draw
//! - Every position is kept; clicking a history entry jumps back to it,
//!   and a new move from there discards the later entries
//!
//! # Architecture
//!
//! - [`board`]: Marks, cells and immutable board snapshots
//! - [`rules`]: Winning lines and draw detection
//! - [`game`]: The session value and its transitions
//! - [`ui`]: egui views and the eframe app that owns the session
//! - [`config`]: Startup configuration
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameSession, GameStatus, Mark};
//!
//! let session = [0, 3, 4, 6, 8]
//!     .into_iter()
//!     .fold(GameSession::new(), |s, cell| s.apply_move(cell));
//!
//! let line = session.winner().unwrap();
//! assert_eq!(line.cells, [0, 4, 8]);
//! assert_eq!(line.mark, Mark::X);
//! assert!(matches!(session.status(), GameStatus::Winner(_)));
//!
//! // Back to the start; history is kept until a new move is made
//! let rewound = session.jump_to(0);
//! assert_eq!(rewound.history().len(), 6);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, BOARD_CELLS};
pub use config::AppConfig;
pub use game::{GameSession, GameStatus, HistoryEntry, MoveError};
pub use rules::{evaluate, WinningLine};
