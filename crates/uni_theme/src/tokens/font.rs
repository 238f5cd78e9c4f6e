//! Font token names and deferred font descriptions
//!
//! Fonts are not part of the [`DesignToken`](crate::tokens::DesignToken)
//! union: the host framework's font object is not value-equal, so design
//! systems carry a [`FontDescription`] instead and a render-time provider
//! materializes it, honoring the platform's dynamic text scaling.

use serde::{Deserialize, Serialize};

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of font token names.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontToken {
    Headline,
    Title,
    Body,
    Caption,
    Mono,
}

impl FontToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Title => "title",
            Self::Body => "body",
            Self::Caption => "caption",
            Self::Mono => "mono",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Font, self.name())
    }

    pub fn all() -> &'static [FontToken] {
        const TOKENS: [FontToken; 5] = [
            FontToken::Headline,
            FontToken::Title,
            FontToken::Body,
            FontToken::Caption,
            FontToken::Mono,
        ];
        &TOKENS
    }
}

/// Font family selector.
///
/// The generic variants defer the concrete face to the platform;
/// `Named` pins a specific installed family.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    Named(String),
}

/// Font weight scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

/// A serializable, value-equal description of a font.
///
/// Size is in points before dynamic-type scaling; the out-of-scope font
/// provider applies the platform's current text-scaling preference when
/// materializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescription {
    pub family: FontFamily,
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

impl FontDescription {
    pub fn new(family: FontFamily, size: f32, weight: FontWeight) -> Self {
        Self {
            family,
            size,
            weight,
            italic: false,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Fallback returned when a font token cannot be resolved under a
    /// degrading policy: the platform sans face at body size.
    pub fn fallback() -> Self {
        Self::new(FontFamily::SansSerif, 17.0, FontWeight::Regular)
    }
}
