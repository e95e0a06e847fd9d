//! GUI module for the tic-tac-toe game
//!
//! This module provides a native and web GUI using egui/eframe.

mod app;
mod board_view;
mod history_view;
mod interaction;
mod theme;
pub mod view_model;

pub use app::TicTacToeApp;
pub use interaction::Interaction;
pub use view_model::{BoardModel, CellView, HistoryItem, HistoryModel};
