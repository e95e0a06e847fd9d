//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use super::view_model::{BoardModel, CellView};
use crate::board::{Mark, BOARD_SIDE};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked board index if any
    pub fn show(&mut self, ui: &mut egui::Ui, model: &BoardModel) -> Option<usize> {
        let available_size = ui.available_size();

        // Fit the board into the available space
        let board_size =
            (available_size.x.min(available_size.y) - 20.0).clamp(120.0, MAX_BOARD_SIZE);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIDE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        for (row, cells) in model.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                self.draw_cell(&painter, row, col, cell);
            }
        }

        self.draw_grid(&painter);

        // Hover preview only on cells that would accept a move
        let hovered = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_grid(pointer));
        if let Some((row, col)) = hovered {
            let cell = &model.rows[row][col];
            if !model.game_over && cell.cell.is_empty() {
                let rect = self.cell_rect(row, col).shrink(2.0);
                painter.rect_filled(rect, CornerRadius::same(4), CELL_HOVER);
            }
        }

        // A touch release arrives together with PointerGone, which clears the
        // hover position; the interact position survives it.
        // Clicks are forwarded as-is; the session decides whether they count.
        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pointer| self.screen_to_grid(pointer))
                .map(|(row, col)| model.rows[row][col].index);
        }

        None
    }

    /// Draw the inner grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIDE as f32 * self.cell_size;

        for i in 1..BOARD_SIDE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw cell background and mark
    fn draw_cell(&self, painter: &Painter, row: usize, col: usize, view: &CellView) {
        let rect = self.cell_rect(row, col);

        if view.highlighted {
            painter.rect_filled(rect.shrink(2.0), CornerRadius::same(4), WIN_HIGHLIGHT);
        }

        if let Some(mark) = view.cell.mark() {
            self.draw_mark(painter, rect.center(), mark);
        }
    }

    fn draw_mark(&self, painter: &Painter, center: Pos2, mark: Mark) {
        let radius = self.cell_size * MARK_RATIO;

        match mark {
            Mark::X => {
                let stroke = Stroke::new(MARK_STROKE_WIDTH, MARK_X);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, MARK_O));
            }
        }
    }

    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + col as f32 * self.cell_size,
                BOARD_MARGIN + row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a (row, col) grid position
    pub fn screen_to_grid(&self, screen_pos: Pos2) -> Option<(usize, usize)> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (row < BOARD_SIDE && col < BOARD_SIDE).then_some((row, col))
    }
}
