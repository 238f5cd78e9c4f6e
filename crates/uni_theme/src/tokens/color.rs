//! Color token names and semantic color roles

use std::fmt;

use uni_core::Color;

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of color token names.
///
/// Every variant maps to a fixed key in the `color` group; the resolver
/// accepts only these, so a typo is a compile error rather than a runtime
/// miss. Raw-key lookup remains available for tooling.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    Accent,

    // Surfaces
    Background,
    Surface,
    SurfaceElevated,

    // Text
    TextPrimary,
    TextSecondary,
    TextInverse,
    Link,

    // Borders
    Border,
    BorderFocus,
    Separator,

    // Status colors
    Success,
    Warning,
    Error,
    Info,
}

impl ColorToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryHover => "primary-hover",
            Self::PrimaryActive => "primary-active",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::SurfaceElevated => "surface-elevated",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextInverse => "text-inverse",
            Self::Link => "link",
            Self::Border => "border",
            Self::BorderFocus => "border-focus",
            Self::Separator => "separator",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Color, self.name())
    }

    /// Full token list, for authoring checks and tooling.
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 19] = [
            ColorToken::Primary,
            ColorToken::PrimaryHover,
            ColorToken::PrimaryActive,
            ColorToken::Secondary,
            ColorToken::Accent,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::SurfaceElevated,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::TextInverse,
            ColorToken::Link,
            ColorToken::Border,
            ColorToken::BorderFocus,
            ColorToken::Separator,
            ColorToken::Success,
            ColorToken::Warning,
            ColorToken::Error,
            ColorToken::Info,
        ];
        &TOKENS
    }
}

/// Platform-appearance color roles.
///
/// A semantic color names a display role rather than a value; the concrete
/// color depends on the appearance the system is currently rendering for
/// and is resolved at lookup time, never stored.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticColor {
    Label,
    SecondaryLabel,
    TertiaryLabel,
    PlaceholderText,
    Separator,
    Link,
    SystemBackground,
    SecondarySystemBackground,
    SystemFill,
    Accent,
}

impl SemanticColor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::SecondaryLabel => "secondary-label",
            Self::TertiaryLabel => "tertiary-label",
            Self::PlaceholderText => "placeholder-text",
            Self::Separator => "separator",
            Self::Link => "link",
            Self::SystemBackground => "system-background",
            Self::SecondarySystemBackground => "secondary-system-background",
            Self::SystemFill => "system-fill",
            Self::Accent => "accent",
        }
    }

    /// Production fallback when the platform cannot resolve this role.
    ///
    /// Per-role rather than one global sentinel: a failed `label` still
    /// renders readable near-black text, a failed `separator` a mid gray.
    pub const fn fallback(self) -> Color {
        match self {
            Self::Label => Color::from_hex(0x1C1C1E),
            Self::SecondaryLabel => Color::from_hex(0x3A3A3C),
            Self::TertiaryLabel => Color::from_hex(0x48484A),
            Self::PlaceholderText => Color::from_hex(0x8E8E93),
            Self::Separator => Color::from_hex(0x8E8E93),
            Self::Link => Color::from_hex(0x007AFF),
            Self::SystemBackground => Color::WHITE,
            Self::SecondarySystemBackground => Color::from_hex(0xF2F2F7),
            Self::SystemFill => Color::from_hex(0xC7C7CC),
            Self::Accent => Color::from_hex(0x007AFF),
        }
    }

    pub fn all() -> &'static [SemanticColor] {
        const ROLES: [SemanticColor; 10] = [
            SemanticColor::Label,
            SemanticColor::SecondaryLabel,
            SemanticColor::TertiaryLabel,
            SemanticColor::PlaceholderText,
            SemanticColor::Separator,
            SemanticColor::Link,
            SemanticColor::SystemBackground,
            SemanticColor::SecondarySystemBackground,
            SemanticColor::SystemFill,
            SemanticColor::Accent,
        ];
        &ROLES
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
