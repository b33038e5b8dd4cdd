//! Static color palettes and color-specification parsing.

use std::collections::HashMap;

use egui::Color32;
use once_cell::sync::Lazy;

use crate::error::{AppError, Result};

/// Outline drawn around the raised frames.
pub const FRAME_STROKE: Color32 = Color32::from_rgb(120, 120, 120);

/// Fill behind each reminder row.
pub const ROW_FILL: Color32 = Color32::from_rgb(236, 236, 236);

/// Color names accepted in the color field, keyed lowercase without spaces.
///
/// Covers the X11 names people actually type; anything else goes through hex.
pub static NAMED_COLORS: Lazy<HashMap<&'static str, Color32>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color32::from_rgb(0, 0, 0)),
        ("white", Color32::from_rgb(255, 255, 255)),
        ("red", Color32::from_rgb(255, 0, 0)),
        ("green", Color32::from_rgb(0, 255, 0)),
        ("blue", Color32::from_rgb(0, 0, 255)),
        ("yellow", Color32::from_rgb(255, 255, 0)),
        ("cyan", Color32::from_rgb(0, 255, 255)),
        ("magenta", Color32::from_rgb(255, 0, 255)),
        ("orange", Color32::from_rgb(255, 165, 0)),
        ("purple", Color32::from_rgb(160, 32, 240)),
        ("pink", Color32::from_rgb(255, 192, 203)),
        ("brown", Color32::from_rgb(165, 42, 42)),
        ("gray", Color32::from_rgb(190, 190, 190)),
        ("grey", Color32::from_rgb(190, 190, 190)),
        ("lightgray", Color32::from_rgb(211, 211, 211)),
        ("lightgrey", Color32::from_rgb(211, 211, 211)),
        ("darkgray", Color32::from_rgb(169, 169, 169)),
        ("darkgrey", Color32::from_rgb(169, 169, 169)),
        ("lightblue", Color32::from_rgb(173, 216, 230)),
        ("skyblue", Color32::from_rgb(135, 206, 235)),
        ("navy", Color32::from_rgb(0, 0, 128)),
        ("lightgreen", Color32::from_rgb(144, 238, 144)),
        ("darkgreen", Color32::from_rgb(0, 100, 0)),
        ("lightyellow", Color32::from_rgb(255, 255, 224)),
        ("gold", Color32::from_rgb(255, 215, 0)),
        ("salmon", Color32::from_rgb(250, 128, 114)),
        ("violet", Color32::from_rgb(238, 130, 238)),
        ("turquoise", Color32::from_rgb(64, 224, 208)),
        ("beige", Color32::from_rgb(245, 245, 220)),
        ("ivory", Color32::from_rgb(255, 255, 240)),
    ])
});

/// Turn a color specification (`#RGB`, `#RRGGBB`, `#RRGGBBAA` or a name
/// such as `"light blue"`) into a paintable color.
pub fn parse_color(spec: &str) -> Result<Color32> {
    let trimmed = spec.trim();
    let invalid = |reason: String| AppError::InvalidColor {
        input: spec.to_string(),
        reason,
    };

    if trimmed.starts_with('#') {
        return Color32::from_hex(trimmed).map_err(|e| invalid(format!("bad hex color ({e:?})")));
    }

    let key: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    NAMED_COLORS
        .get(key.as_str())
        .copied()
        .ok_or_else(|| invalid("unknown color name".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_color("#FF0000"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("#00ff88"), Ok(Color32::from_rgb(0, 255, 136)));
        assert_eq!(parse_color("#0f8"), Ok(Color32::from_rgb(0, 255, 136)));
        assert_eq!(parse_color("  #000000 "), Ok(Color32::BLACK));
    }

    #[test]
    fn names_ignore_case_and_spaces() {
        let expected = Color32::from_rgb(173, 216, 230);
        assert_eq!(parse_color("lightblue"), Ok(expected));
        assert_eq!(parse_color("Light Blue"), Ok(expected));
        assert_eq!(parse_color("LIGHTBLUE"), Ok(expected));
    }

    #[test]
    fn rejects_garbage() {
        for spec in ["", "not a color", "#12", "#GGGGGG", "FF0000"] {
            match parse_color(spec) {
                Err(AppError::InvalidColor { input, .. }) => assert_eq!(input, spec),
                other => panic!("{spec:?} parsed as {other:?}"),
            }
        }
    }
}
