//! Panels of the main window, each implementing `AppPanel`.

pub mod clock_view;
pub mod color_view;
pub mod reminder_view;
