//! Textual color parsing.
//!
//! Accepts the usual hex notations (`#RGB`, `#RRGGBB`, `#RRGGBBAA`) and
//! converts them to the [`egui::Color32`] representation the renderer uses.

use egui::Color32;

use crate::error::GraphError;

/// Parse a hex color specification into a [`Color32`].
///
/// Supported forms: `#RGB`, `#RRGGBB`, `#RRGGBBAA`. The leading `#` is
/// required.
pub fn parse(spec: &str) -> Result<Color32, GraphError> {
    let bad = || GraphError::InvalidColor(spec.to_string());

    let hex = spec.strip_prefix('#').ok_or_else(bad)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    match hex.len() {
        // Shorthand: each nibble doubles, so "#f80" == "#ff8800".
        3 => {
            let mut it = hex.chars().map(|c| c.to_digit(16).unwrap() as u8);
            let (r, g, b) = (
                it.next().unwrap(),
                it.next().unwrap(),
                it.next().unwrap(),
            );
            Ok(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
            Ok(Color32::from_rgb(r, g, b))
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
            let a = u8::from_str_radix(&hex[6..8], 16).map_err(|_| bad())?;
            Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        _ => Err(bad()),
    }
}
