//! sRGB color value with clamped floating-point channels

use serde::{Deserialize, Serialize};

/// An immutable sRGB color with alpha.
///
/// Every channel is clamped to `[0.0, 1.0]` at construction, on every
/// constructor path. Out-of-range inputs are normalized silently; NaN
/// clamps to `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const fn clamp01(v: f32) -> f32 {
    // NaN fails both comparisons and clamps to 0.0
    if v >= 1.0 {
        1.0
    } else if v >= 0.0 {
        v
    } else {
        0.0
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Conspicuous sentinel used by resolvers for unresolvable color tokens.
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    /// Create a color from RGBA components, clamping each to `[0.0, 1.0]`.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            a: clamp01(a),
        }
    }

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
            1.0,
        )
    }

    /// Parse a hex color string.
    ///
    /// Accepts 3, 4, 6, and 8 hex-digit forms with an optional leading `#`,
    /// case-insensitive. Shorthand digits are duplicated (`#1AF` is
    /// `#11AAFF`); RGB-only forms imply alpha `1.0`. Any other length or a
    /// non-hex character yields opaque black - a silent normalization, not
    /// an error.
    pub fn from_hex_str(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let nibbles: Option<Vec<u32>> = digits.chars().map(|c| c.to_digit(16)).collect();
        let Some(n) = nibbles else {
            return Self::BLACK;
        };
        let pair = |hi: u32, lo: u32| (hi * 16 + lo) as f32 / 255.0;
        match n.as_slice() {
            [r, g, b] => Self::new(*r as f32 / 15.0, *g as f32 / 15.0, *b as f32 / 15.0, 1.0),
            [r, g, b, a] => Self::new(
                *r as f32 / 15.0,
                *g as f32 / 15.0,
                *b as f32 / 15.0,
                *a as f32 / 15.0,
            ),
            [r1, r0, g1, g0, b1, b0] => Self::new(pair(*r1, *r0), pair(*g1, *g0), pair(*b1, *b0), 1.0),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Self::new(
                pair(*r1, *r0),
                pair(*g1, *g0),
                pair(*b1, *b0),
                pair(*a1, *a0),
            ),
            _ => Self::BLACK,
        }
    }

    /// Return a copy with a replaced (clamped) alpha channel. RGB is untouched.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: clamp01(alpha),
        }
    }

    /// Linear interpolation between two colors, per channel.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self::new(
            from.r + (to.r - from.r) * t,
            from.g + (to.g - from.g) * t,
            from.b + (to.b - from.b) * t,
            from.a + (to.a - from.a) * t,
        )
    }

    /// Format as a lowercase `#rrggbb` string, dropping alpha.
    pub fn to_hex_rgb(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b)
        )
    }

    /// Format as a lowercase `#rrggbbaa` string.
    pub fn to_hex_rgba(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b),
            channel_u8(self.a)
        )
    }
}

fn channel_u8(v: f32) -> u8 {
    (v * 255.0).round() as u8
}
