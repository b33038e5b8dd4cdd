//! Clock label: top-left cell.

use crate::ui::panel::{AppPanel, AppState, raised_frame};
use egui::RichText;

#[derive(Default)]
pub struct ClockView;

impl AppPanel for ClockView {
    fn name(&self) -> &str {
        "clock"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        raised_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(state.clock.text()).size(18.0).monospace());
            });
        });
    }
}
