//! Color math — hex parsing and RGB → HSL conversion, direct math without
//! external dependencies.

use crate::color::{Hsl, Rgb};

/// Parse a `#RRGGBB` hex string. The `#` is optional (at most one),
/// case-insensitive, exactly six hex digits.
pub(crate) fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Hex → HSL via the piecewise hue formula.
///
/// Hue rounds to the nearest whole degree in `[0, 360)`; saturation and
/// lightness are percentages rounded to one decimal.
pub(crate) fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let rgb = hex_to_rgb(hex)?;
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let mut h = (sector * 60.0).round() as i32;
    if h < 0 {
        h += 360;
    }

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Some(Hsl {
        h,
        s: round1(s * 100.0),
        l: round1(l * 100.0),
    })
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(
            hex_to_rgb("336699"),
            Some(Rgb {
                r: 0x33,
                g: 0x66,
                b: 0x99
            })
        );
        assert_eq!(hex_to_rgb("#aBcDeF"), Some(Rgb { r: 0xAB, g: 0xCD, b: 0xEF }));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("bad"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
        assert_eq!(hex_to_rgb("##FF0000"), None);
        assert_eq!(hex_to_rgb("#FF00000"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn pure_red() {
        assert_eq!(
            hex_to_hsl("#FF0000"),
            Some(Hsl {
                h: 0,
                s: 100.0,
                l: 50.0
            })
        );
    }

    #[test]
    fn gray_has_zero_saturation() {
        let hsl = hex_to_hsl("#808080").unwrap();
        assert_eq!(hsl.h, 0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 50.2);
    }

    #[test]
    fn green_dominant_sector() {
        assert_eq!(
            hex_to_hsl("#00FF00"),
            Some(Hsl {
                h: 120,
                s: 100.0,
                l: 50.0
            })
        );
    }

    #[test]
    fn negative_hue_wraps_into_range() {
        // Magenta: red dominant, blue above green, raw hue is negative.
        let hsl = hex_to_hsl("#FF00FF").unwrap();
        assert_eq!(hsl.h, 300);
    }

    #[test]
    fn mid_tone_rounds_to_one_decimal() {
        assert_eq!(
            hex_to_hsl("#336699"),
            Some(Hsl {
                h: 210,
                s: 50.0,
                l: 40.0
            })
        );
    }

    #[test]
    fn invalid_hex_propagates() {
        assert_eq!(hex_to_hsl("nope"), None);
    }
}
