//! Engine sub-modules: clock text, color control, and the reminder list.

pub mod clock;
pub mod color;
pub mod reminders;
