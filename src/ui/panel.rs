//! The `AppPanel` trait and the shared `AppState` view passed to each panel.
//!
//! Panels own no domain state. `App` lends them an `AppState` every frame and
//! they read and mutate through it; button actions therefore finish before the
//! next panel is drawn.

use crate::engine::{clock::Clock, color::ColorControl, reminders::ReminderPanel};
use crate::ui::colors::FRAME_STROKE;

/// Mutable view of the application state shared with every panel's `show` call.
pub struct AppState<'a> {
    pub clock: &'a Clock,
    pub color: &'a mut ColorControl,
    pub reminders: &'a mut ReminderPanel,
}

/// Trait implemented by every panel of the main window.
pub trait AppPanel {
    /// Stable name, used for widget ids and log lines.
    fn name(&self) -> &str;

    /// Draw the panel into `ui`, filling the space it was given.
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>);
}

/// Outlined frame used for every panel and reminder row.
pub fn raised_frame() -> egui::Frame {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, FRAME_STROKE))
        .corner_radius(2.0)
        .inner_margin(4.0)
}

#[cfg(test)]
pub(crate) mod test_support {
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, vec2};

    /// Same logical size as the default window.
    const SCREEN: [f32; 2] = [512.0, 256.0];

    fn run_frame(ctx: &egui::Context, events: Vec<Event>, show: &mut impl FnMut(&mut Ui)) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(SCREEN[0], SCREEN[1]))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| show(ui));
        });
    }

    fn button_event(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Draw `show` in a headless context until it is laid out, click the
    /// primary button at `pos`, then draw one more frame with the result.
    pub fn click_at(pos: Pos2, mut show: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        run_frame(&ctx, Vec::new(), &mut show);
        run_frame(&ctx, Vec::new(), &mut show);
        run_frame(
            &ctx,
            vec![Event::PointerMoved(pos), button_event(pos, true)],
            &mut show,
        );
        run_frame(&ctx, vec![button_event(pos, false)], &mut show);
        run_frame(&ctx, Vec::new(), &mut show);
    }

    /// Draw `show` once in a headless context.
    pub fn draw(mut show: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        run_frame(&ctx, Vec::new(), &mut show);
    }
}
