//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);
pub const CELL_HOVER: Color32 = Color32::from_rgb(225, 228, 232);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(40, 90, 200);
pub const MARK_O: Color32 = Color32::from_rgb(200, 70, 60);

// Winning line cells
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 110);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const MAX_BOARD_SIZE: f32 = 480.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_RATIO: f32 = 0.3;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
