//! Mote color palettes.
//!
//! Every mote's color is a fixed linear blend between two endpoint colors,
//! chosen once at generation. Endpoints are plain RGB triples in `[0, 1]`
//! (a [`Vec3`]), optionally parsed from CSS-style hex strings. The blend is
//! a straight componentwise lerp in whatever space the endpoints are
//! expressed in - no gamma correction is applied.

use crate::error::ColorParseError;
use glam::Vec3;

/// Stock palette: accent blue (`#2563eb`).
pub const ACCENT_BLUE: Vec3 = Vec3::new(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0);

/// Stock palette: sky blue (`#93c5fd`).
pub const SKY_BLUE: Vec3 = Vec3::new(147.0 / 255.0, 197.0 / 255.0, 253.0 / 255.0);

/// Linear blend between two colors: `a + t * (b - a)` componentwise.
#[inline]
pub fn blend(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Parse a CSS-style hex color (`#rrggbb` or the short `#rgb` form, the
/// leading `#` optional) into an RGB triple in `[0, 1]`.
///
/// # Example
///
/// ```
/// use motefield::color;
///
/// let blue = color::parse_hex("#2563eb").unwrap();
/// assert!((blue.z - 235.0 / 255.0).abs() < 1e-6);
/// assert_eq!(color::parse_hex("fff"), color::parse_hex("#ffffff"));
/// ```
pub fn parse_hex(hex: &str) -> Result<Vec3, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let nibble = |c: char| -> Result<u32, ColorParseError> {
        c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))
    };

    let chars: Vec<char> = digits.chars().collect();
    let (r, g, b) = match chars.len() {
        // #rgb expands each digit: f -> ff
        3 => (
            nibble(chars[0])? * 17,
            nibble(chars[1])? * 17,
            nibble(chars[2])? * 17,
        ),
        6 => (
            nibble(chars[0])? * 16 + nibble(chars[1])?,
            nibble(chars[2])? * 16 + nibble(chars[3])?,
            nibble(chars[4])? * 16 + nibble(chars[5])?,
        ),
        len => return Err(ColorParseError::InvalidLength(len)),
    };

    Ok(Vec3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}
