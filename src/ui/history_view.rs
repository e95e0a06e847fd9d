//! Status line, move list and order toggle

use egui::{RichText, ScrollArea};

use super::interaction::Interaction;
use super::theme::*;
use super::view_model::HistoryModel;

#[derive(Default)]
pub struct HistoryView;

impl HistoryView {
    /// Render the history panel and return the clicked entry or toggle
    pub fn show(&self, ui: &mut egui::Ui, model: &HistoryModel) -> Option<Interaction> {
        let mut clicked = None;

        ui.label(RichText::new(&model.status).size(18.0).strong().color(TEXT_PRIMARY));
        ui.add_space(10.0);

        let order = if model.ascending { "Oldest first" } else { "Newest first" };
        ui.label(RichText::new(format!("MOVES · {order}")).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);

        ScrollArea::vertical()
            .max_height((ui.available_height() - 48.0).max(80.0))
            .show(ui, |ui| {
                for item in &model.items {
                    let mut text = RichText::new(&item.description).size(13.0);
                    text = if item.is_current {
                        text.strong().color(TEXT_PRIMARY)
                    } else {
                        text.color(TEXT_SECONDARY)
                    };

                    if ui.button(text).clicked() {
                        clicked = Some(Interaction::Jump(item.step));
                    }
                }
            });

        ui.add_space(10.0);
        if ui.button(RichText::new("Change order").size(13.0)).clicked() {
            clicked = Some(Interaction::ToggleOrder);
        }

        clicked
    }
}
