//! UI layer: App orchestrator, AppPanel trait, colour palettes, and panels.

pub mod app;
pub mod colors;
pub mod panel;
pub mod panels;
