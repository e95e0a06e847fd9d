//! Main application for the tic-tac-toe GUI

use egui::{CentralPanel, Context, Frame, RichText, SidePanel};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::history_view::HistoryView;
use super::interaction::Interaction;
use super::theme::*;
use super::view_model::{BoardModel, HistoryModel};
use crate::config::AppConfig;
use crate::game::GameSession;

/// Main tic-tac-toe application.
///
/// Owns the only [`GameSession`]. Views get read-only models and hand back
/// an [`Interaction`]; the session is replaced by the transition result.
pub struct TicTacToeApp {
    session: GameSession,
    board_view: BoardView,
    history_view: HistoryView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_session(GameSession::new())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        info!(sort_ascending = config.sort_ascending, "Starting new game");
        Self::with_session(GameSession::with_sort_ascending(config.sort_ascending))
    }

    pub fn with_session(session: GameSession) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
            history_view: HistoryView,
        }
    }

    /// Apply one interaction to the owned session
    pub fn handle(&mut self, interaction: Interaction) {
        let next = interaction.apply(&self.session);
        if next != self.session {
            debug!(?interaction, step = next.current_step(), "Session updated");
        }
        self.session = next;
    }

    /// Render the side panel with status and move history
    fn render_side_panel(&self, ctx: &Context) -> Option<Interaction> {
        let model = HistoryModel::from_session(&self.session);

        SidePanel::right("history_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);
                self.history_view.show(ui, &model)
            })
            .inner
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) -> Option<Interaction> {
        let model = BoardModel::from_session(&self.session);

        CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    self.board_view.show(ui, &model).map(Interaction::Cell)
                })
                .inner
            })
            .inner
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Side panel first so the central panel gets the remaining space
        let from_history = self.render_side_panel(ctx);
        let from_board = self.render_board(ctx);

        // At most one click lands per frame
        if let Some(interaction) = from_history.or(from_board) {
            self.handle(interaction);
        }
    }
}
