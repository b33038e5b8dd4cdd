//! Color control: a text field whose value is painted onto the field itself
//! and its "Update Color" button.

use egui::Color32;

use crate::error::Result;
use crate::ui::colors::parse_color;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorControl {
    /// Live text of the color field.
    pub input: String,
    applied: String,
    background: Color32,
}

impl ColorControl {
    /// Start with `initial` both in the field and painted.
    pub fn new(initial: &str) -> Result<Self> {
        Ok(Self {
            input: initial.to_string(),
            applied: initial.to_string(),
            background: parse_color(initial)?,
        })
    }

    /// "Update Color": copy the field text onto both backgrounds.
    ///
    /// If the text cannot be painted nothing changes and the error is
    /// returned to the caller.
    pub fn apply(&mut self) -> Result<()> {
        let background = parse_color(&self.input)?;
        if self.applied != self.input {
            log::info!("background color: {:?} -> {:?}", self.applied, self.input);
        }
        self.applied.clone_from(&self.input);
        self.background = background;
        Ok(())
    }

    /// The specification currently painted.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn field_background(&self) -> Color32 {
        self.background
    }

    pub fn button_background(&self) -> Color32 {
        self.background
    }
}
