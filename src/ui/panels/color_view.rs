//! Color control: color field stacked over the "Update Color" button.

use crate::ui::panel::{AppPanel, AppState, raised_frame};
use egui::{Button, TextEdit};
use egui_extras::{Size, StripBuilder};

#[derive(Default)]
pub struct ColorView;

impl AppPanel for ColorView {
    fn name(&self) -> &str {
        "color"
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        let field_bg = state.color.field_background();
        let button_bg = state.color.button_background();
        let id = self.name();

        raised_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            StripBuilder::new(ui)
                .size(Size::relative(0.5))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        ui.add_sized(
                            ui.available_size(),
                            TextEdit::singleline(&mut state.color.input)
                                .id_salt((id, "input"))
                                .background_color(field_bg),
                        );
                    });
                    strip.cell(|ui| {
                        let button = Button::new("Update Color").fill(button_bg);
                        if ui.add_sized(ui.available_size(), button).clicked() {
                            match state.color.apply() {
                                Ok(()) => ui.ctx().request_repaint(),
                                Err(e) => log::warn!("update color: {e}"),
                            }
                        }
                    });
                });
        });
    }
}
