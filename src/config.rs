//! Startup defaults for the window and the initial widget state.

use std::time::Duration;

/// Everything `App::new` needs to build its initial state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Initial inner size of the window in logical points.
    pub window_size: [f32; 2],
    /// Text placed in the color field and painted on startup.
    pub default_color: String,
    pub placeholder_reminders: Vec<String>,
    /// Upper bound between repaints; keeps the seconds on the clock ticking
    /// while the user is idle.
    pub refresh_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Reminders".to_string(),
            window_size: [512.0, 256.0],
            default_color: "#00FF88".to_string(),
            placeholder_reminders: ["help", "me", "understand"]
                .into_iter()
                .map(String::from)
                .collect(),
            refresh_interval: Duration::from_millis(250),
        }
    }
}
