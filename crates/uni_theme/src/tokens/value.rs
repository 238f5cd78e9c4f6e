//! The design token value union

use std::fmt;

use uni_core::{Color, Gradient};

use crate::tokens::color::SemanticColor;

/// A design token value - a closed tagged union, exactly one case per
/// instance.
///
/// Construction and pattern inspection only; all resolution and
/// validation logic lives in the resolver. Fonts are deliberately not a
/// case here (see [`crate::tokens::FontDescription`]).
#[derive(Clone, Debug, PartialEq)]
pub enum DesignToken {
    /// A fixed color value.
    Color(Color),
    /// A platform-appearance color role, resolved at lookup time.
    SemanticColor(SemanticColor),
    /// Spacing in points.
    Spacing(f32),
    /// Corner radius in points.
    Radius(f32),
    /// Duration in seconds.
    Duration(f32),
    /// Identifier into an external asset store.
    Asset(String),
    /// Gradient stop list plus geometry.
    Gradient(Gradient),
}

impl DesignToken {
    /// The kind of value this token holds, for diagnostics.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Color(_) => TokenKind::Color,
            Self::SemanticColor(_) => TokenKind::SemanticColor,
            Self::Spacing(_) => TokenKind::Spacing,
            Self::Radius(_) => TokenKind::Radius,
            Self::Duration(_) => TokenKind::Duration,
            Self::Asset(_) => TokenKind::Asset,
            Self::Gradient(_) => TokenKind::Gradient,
        }
    }
}

/// Discriminant of [`DesignToken`], used in mismatch diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Color,
    SemanticColor,
    Spacing,
    Radius,
    Duration,
    Asset,
    Gradient,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Color => "color",
            Self::SemanticColor => "semantic color",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::Duration => "duration",
            Self::Asset => "asset",
            Self::Gradient => "gradient",
        };
        f.write_str(kind)
    }
}
