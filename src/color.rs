//! PaletteColor type — the palette entry shared by the widget, the filter
//! engine, and the storage layer.
//!
//! Stores the hex string as typed plus a default marker. Channel values are
//! derived on demand and never persisted.

use crate::math;

/// One palette entry: a `#RRGGBB` hex string plus a default marker.
///
/// Default colors come from the built-in list, are never written to the
/// store, and get no remove control in the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    hex: String,
    is_default: bool,
}

impl PaletteColor {
    /// Wrap a user-supplied hex string as a removable, persisted color.
    pub fn custom(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            is_default: false,
        }
    }

    /// Wrap a built-in hex string as a non-removable default.
    pub fn default_color(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            is_default: true,
        }
    }

    /// The hex string as the user typed it.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Whether this entry comes from the built-in default list.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Channel values 0–255. `None` when the hex string does not parse.
    pub fn rgb(&self) -> Option<Rgb> {
        math::hex_to_rgb(&self.hex)
    }

    /// HSL equivalent. `None` when the hex string does not parse.
    pub fn hsl(&self) -> Option<Hsl> {
        math::hex_to_hsl(&self.hex)
    }
}

/// RGB channels, 0–255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL values: `h` in whole degrees in `[0, 360)`, `s` and `l` as
/// percentages rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: i32,
    pub s: f64,
    pub l: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_colors_are_removable() {
        let c = PaletteColor::custom("#ABCDEF");
        assert_eq!(c.hex(), "#ABCDEF");
        assert!(!c.is_default());
    }

    #[test]
    fn default_colors_are_marked() {
        let c = PaletteColor::default_color("#FF0000");
        assert!(c.is_default());
    }

    #[test]
    fn channel_accessors_fail_on_bad_hex() {
        let c = PaletteColor::custom("not a color");
        assert_eq!(c.rgb(), None);
        assert_eq!(c.hsl(), None);
    }
}
