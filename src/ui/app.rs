//! Application orchestrator: owns all widget state and drives the panels.

use crate::config::AppConfig;
use crate::engine::{
    clock::Clock,
    color::ColorControl,
    reminders::{ReminderList, ReminderPanel},
};
use crate::error::Result;
use crate::ui::panel::{AppPanel, AppState};
use crate::ui::panels::{clock_view::ClockView, color_view::ColorView, reminder_view::ReminderView};
use egui_extras::{Size, StripBuilder};

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Each frame is one redraw cycle:
/// 1. Recompute the clock text from the system clock.
/// 2. Lay out the 2x2 grid and let every panel draw from, and act on, the
///    shared state. Button actions complete inside their panel's `show`.
/// 3. Schedule the next repaint so the clock keeps ticking while idle.
pub struct App {
    config: AppConfig,

    // ── Widget state ───────────────────────────────────────────────────────
    clock: Clock,
    color: ColorControl,
    reminders: ReminderPanel,

    // ── Panels ─────────────────────────────────────────────────────────────
    clock_view: ClockView,
    color_view: ColorView,
    reminder_view: ReminderView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::from_config(config)
    }

    /// Build the initial state without a window; fails only if the configured
    /// default color cannot be painted.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let color = ColorControl::new(&config.default_color)?;
        let reminders = ReminderPanel::new(ReminderList::with_placeholders(
            config.placeholder_reminders.iter().cloned(),
        ));
        log::info!(
            "starting with {} reminders, color {}",
            reminders.list.len(),
            color.applied()
        );

        Ok(Self {
            config,
            clock: Clock::default(),
            color,
            reminders,
            clock_view: ClockView,
            color_view: ColorView,
            reminder_view: ReminderView::default(),
        })
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Clock ──────────────────────────────────────────────────────────
        self.clock.refresh_now();

        // ── 2. Grid: [clock | reminders] over [color | reminders] ────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut state = AppState {
                clock: &self.clock,
                color: &mut self.color,
                reminders: &mut self.reminders,
            };
            let clock_view = &mut self.clock_view;
            let color_view = &mut self.color_view;
            let reminder_view = &mut self.reminder_view;

            StripBuilder::new(ui)
                .size(Size::relative(0.5))
                .size(Size::remainder())
                .horizontal(|mut columns| {
                    columns.strip(|builder| {
                        builder
                            .size(Size::relative(0.5))
                            .size(Size::remainder())
                            .vertical(|mut rows| {
                                rows.cell(|ui| clock_view.show(ui, &mut state));
                                rows.cell(|ui| color_view.show(ui, &mut state));
                            });
                    });
                    columns.cell(|ui| reminder_view.show(ui, &mut state));
                });
        });

        // ── 3. Next cycle ─────────────────────────────────────────────────────
        ctx.request_repaint_after(self.config.refresh_interval);
    }
}
