//! Color utilities shared by the generator and the rasterizer.
//!
//! Scope:
//! - `Rgba8`: the straight-alpha surface pixel
//! - hex parsing and the translucent-color conversion contract
//! - HSL → hex for palette synthesis
//!
//! Descriptions carry colors as CSS-style strings. Only 3- and 6-digit hex
//! is understood; anything else is passed through untouched and resolves to
//! an opaque fallback at paint time (best-effort rendering, never an error).

use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA pixel as stored in a [`Surface`](crate::raster::Surface).
///
/// Bytes are `[r, g, b, a]` in memory order, which is what the PNG/WebP
/// encoders consume directly.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Straight RGBA channels scaled to `[0, 1]`.
    #[inline]
    pub fn channels(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }

    /// Quantizes straight `[0, 1]` channels back to a pixel.
    #[inline]
    pub fn from_channels(c: [f32; 4]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }
}

/// A color expression ready for the paint layer.
///
/// Produced by [`hex_to_translucent`]. `Raw` keeps the input string exactly
/// as given; the paint layer substitutes an opaque fallback for it, so alpha
/// blending is not guaranteed for non-hex colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorExpr {
    /// Parsed hex channels plus the translucency factor, carried unquantized.
    Rgba { r: u8, g: u8, b: u8, alpha: f32 },
    /// Anything that is not 3- or 6-digit hex, unchanged.
    Raw(String),
}

impl ColorExpr {
    /// Straight RGBA channels in `[0, 1]`; `Raw` resolves to `fallback` at
    /// full opacity.
    #[inline]
    pub fn channels_or(&self, fallback: Rgba8) -> [f32; 4] {
        match self {
            ColorExpr::Rgba { r, g, b, alpha } => [
                f32::from(*r) / 255.0,
                f32::from(*g) / 255.0,
                f32::from(*b) / 255.0,
                alpha.clamp(0.0, 1.0),
            ],
            ColorExpr::Raw(_) => fallback.channels(),
        }
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, ColorExpr::Raw(_))
    }
}

/// Parses a 3- or 6-digit hex color, case-insensitive, optional leading `#`.
///
/// 3-digit shorthand expands each digit (`#1af` → `#11aaff`). Returns `None`
/// for every other input, including 4/8-digit hex and named colors.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 3 && digits.len() != 6 {
        return None;
    }

    // Hex digits are ASCII, so a fully-parsed string has exactly
    // `digits.len()` nibbles; any non-hex character bails out first.
    let mut nibbles = [0u8; 6];
    for (slot, ch) in nibbles.iter_mut().zip(digits.chars()) {
        *slot = ch.to_digit(16)? as u8;
    }

    if digits.len() == 3 {
        let expand = |n: u8| n << 4 | n;
        Some((expand(nibbles[0]), expand(nibbles[1]), expand(nibbles[2])))
    } else {
        Some((
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ))
    }
}

/// Converts a hex color plus an alpha scalar into a translucent color
/// expression.
///
/// Non-hex input is returned unchanged with no alpha applied; callers must
/// tolerate such colors silently losing alpha blending.
pub fn hex_to_translucent(color: &str, alpha: f32) -> ColorExpr {
    match parse_hex(color) {
        Some((r, g, b)) => ColorExpr::Rgba { r, g, b, alpha },
        None => ColorExpr::Raw(color.to_owned()),
    }
}

/// Standard HSL → RGB conversion, formatted as `#rrggbb`.
///
/// `h` is in degrees and wraps modulo 360; `s` and `l` are expected in
/// `[0, 1]`. Channels round to the nearest integer and zero-pad to two
/// lowercase hex digits.
pub fn hsl_to_hex(h: f32, s: f32, l: f32) -> String {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let to_hex = |v: f32| ((v + m) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to_hex(r), to_hex(g), to_hex(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_hex ─────────────────────────────────────────────────────────

    #[test]
    fn six_digit_hex() {
        assert_eq!(parse_hex("#06b6d4"), Some((0x06, 0xb6, 0xd4)));
    }

    #[test]
    fn three_digit_hex_expands() {
        assert_eq!(parse_hex("#1af"), Some((0x11, 0xaa, 0xff)));
    }

    #[test]
    fn leading_hash_optional() {
        assert_eq!(parse_hex("ff8000"), Some((0xff, 0x80, 0x00)));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(parse_hex("#FF8000"), parse_hex("#ff8000"));
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "#", "#ff80", "#ffff8000", "red", "#ggg", "+1b6d4", "rgb(1,2,3)"] {
            assert_eq!(parse_hex(bad), None, "{bad:?} should not parse");
        }
    }

    // ── hex_to_translucent ────────────────────────────────────────────────

    #[test]
    fn hex_parses_and_embeds_alpha_unchanged() {
        let expr = hex_to_translucent("#7c3aed", 0.37);
        assert_eq!(
            expr,
            ColorExpr::Rgba { r: 0x7c, g: 0x3a, b: 0xed, alpha: 0.37 }
        );
    }

    #[test]
    fn non_hex_passes_through_unchanged() {
        for raw in ["tomato", "rgba(1, 2, 3, 0.5)", "#beefed00"] {
            assert_eq!(
                hex_to_translucent(raw, 0.5),
                ColorExpr::Raw(raw.to_owned())
            );
        }
    }

    #[test]
    fn raw_resolves_to_fallback_channels() {
        let expr = hex_to_translucent("currentColor", 0.25);
        assert!(expr.is_raw());
        assert_eq!(expr.channels_or(Rgba8::opaque(0, 0, 0)), [0.0, 0.0, 0.0, 1.0]);
    }

    // ── hsl_to_hex ────────────────────────────────────────────────────────

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsl_to_hex(57.0, 0.0, 0.5), "#808080");
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(hsl_to_hex(200.0, 0.8, 0.0), "#000000");
        assert_eq!(hsl_to_hex(200.0, 0.8, 1.0), "#ffffff");
    }

    #[test]
    fn hue_is_periodic() {
        for (h, s, l) in [(30.0, 0.7, 0.6), (245.0, 0.9, 0.1), (359.0, 0.2, 0.8)] {
            assert_eq!(hsl_to_hex(h, s, l), hsl_to_hex(h + 360.0, s, l));
            assert_eq!(hsl_to_hex(h, s, l), hsl_to_hex(h - 360.0, s, l));
        }
    }

    // ── Rgba8 ─────────────────────────────────────────────────────────────

    #[test]
    fn channel_round_trip() {
        let px = Rgba8::new(12, 134, 250, 128);
        assert_eq!(Rgba8::from_channels(px.channels()), px);
    }

    #[test]
    fn from_channels_clamps() {
        assert_eq!(
            Rgba8::from_channels([-0.5, 1.5, 0.5, 2.0]),
            Rgba8::new(0, 255, 128, 255)
        );
    }
}
