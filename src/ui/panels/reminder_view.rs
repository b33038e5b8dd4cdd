//! Reminder panel: one row per stored reminder over the entry + "Add
//! Reminder" row.
//!
//! Rows are laid out from the list on every frame, so the display always
//! matches the list without any bookkeeping of what was drawn before.

use crate::ui::colors::ROW_FILL;
use crate::ui::panel::{AppPanel, AppState, raised_frame};
use egui::{Label, ScrollArea, TextEdit, vec2};
use egui_extras::{Size, StripBuilder};

const ID: &str = "reminders";
const ROW_HEIGHT: f32 = 20.0;
const ADD_BUTTON_WIDTH: f32 = 110.0;

#[derive(Default)]
pub struct ReminderView {
    /// Rows laid out last frame; only used to log growth.
    rows_drawn: usize,
}

/// One reminder, wrapped to the row width and never shorter than `ROW_HEIGHT`.
fn reminder_row(ui: &mut egui::Ui, position: usize, text: &str) -> egui::Response {
    raised_frame()
        .fill(ROW_FILL)
        .show(ui, |ui| {
            ui.push_id(position, |ui| {
                ui.set_min_size(vec2(ui.available_width(), ROW_HEIGHT));
                ui.add(Label::new(text).wrap());
            });
        })
        .response
}

impl ReminderView {
    fn show_rows(&mut self, ui: &mut egui::Ui, state: &AppState<'_>) {
        let list = &state.reminders.list;
        let mut drawn = 0;
        if !list.is_empty() {
            ScrollArea::vertical()
                .id_salt((ID, "rows"))
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (position, text) in list.rows() {
                        reminder_row(ui, position, text);
                        drawn += 1;
                    }
                });
        }

        if drawn != self.rows_drawn {
            log::debug!("reminder rows: {} -> {drawn}", self.rows_drawn);
            self.rows_drawn = drawn;
        }
    }
}

impl AppPanel for ReminderView {
    fn name(&self) -> &str {
        ID
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        raised_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            StripBuilder::new(ui)
                .size(Size::relative(0.9))
                .size(Size::remainder().at_least(ROW_HEIGHT + 4.0))
                .vertical(|mut strip| {
                    strip.cell(|ui| self.show_rows(ui, state));
                    strip.strip(|builder| {
                        builder
                            .size(Size::remainder())
                            .size(Size::exact(ADD_BUTTON_WIDTH))
                            .horizontal(|mut strip| {
                                strip.cell(|ui| {
                                    ui.add_sized(
                                        ui.available_size(),
                                        TextEdit::singleline(&mut state.reminders.input)
                                            .id_salt((ID, "input")),
                                    );
                                });
                                strip.cell(|ui| {
                                    if ui
                                        .add_sized(ui.available_size(), egui::Button::new("Add Reminder"))
                                        .clicked()
                                    {
                                        state.reminders.add_reminder();
                                        ui.ctx().request_repaint();
                                    }
                                });
                            });
                    });
                });
        });
    }
}
