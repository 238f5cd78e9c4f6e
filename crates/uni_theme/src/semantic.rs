//! Semantic color resolution
//!
//! Maps a [`SemanticColor`] role to a concrete sRGB color for the
//! appearance currently in effect. This is the only module that reads
//! platform-appearance state, and it re-resolves on every call - cached
//! results would go stale the moment the user switches light/dark mode.

use uni_core::Color;

use crate::appearance::{Appearance, AppearanceProvider, SystemAppearance};
use crate::error::SemanticColorError;
use crate::tokens::SemanticColor;

/// Resolves semantic color roles against an appearance source.
pub struct SemanticColorResolver {
    provider: Box<dyn AppearanceProvider>,
}

impl SemanticColorResolver {
    pub fn new(provider: Box<dyn AppearanceProvider>) -> Self {
        Self { provider }
    }

    /// Resolver backed by the live OS appearance.
    pub fn system() -> Self {
        Self::new(Box::new(SystemAppearance))
    }

    /// Resolve `role` for the ambient appearance.
    ///
    /// Queries the provider on every call. Fails when the appearance
    /// cannot be determined; the caller decides between fail-fast and the
    /// role's documented fallback.
    pub fn resolve(&self, role: SemanticColor) -> Result<Color, SemanticColorError> {
        match self.provider.current_appearance() {
            Some(appearance) => Ok(Self::resolve_in(role, appearance)),
            None => Err(SemanticColorError {
                role,
                reason: "system appearance could not be determined",
            }),
        }
    }

    /// Resolve `role` for an explicitly supplied appearance, e.g. to
    /// render a thumbnail of the non-active appearance. Total: the role
    /// tables cover every role in both appearances.
    pub fn resolve_in(role: SemanticColor, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => light(role),
            Appearance::Dark => dark(role),
        }
    }
}

fn light(role: SemanticColor) -> Color {
    match role {
        SemanticColor::Label => Color::BLACK,
        SemanticColor::SecondaryLabel => Color::new(0.235, 0.235, 0.263, 0.6),
        SemanticColor::TertiaryLabel => Color::new(0.235, 0.235, 0.263, 0.3),
        SemanticColor::PlaceholderText => Color::new(0.235, 0.235, 0.263, 0.3),
        SemanticColor::Separator => Color::new(0.235, 0.235, 0.263, 0.29),
        SemanticColor::Link => Color::from_hex(0x007AFF),
        SemanticColor::SystemBackground => Color::WHITE,
        SemanticColor::SecondarySystemBackground => Color::from_hex(0xF2F2F7),
        SemanticColor::SystemFill => Color::new(0.471, 0.471, 0.502, 0.2),
        SemanticColor::Accent => Color::from_hex(0x007AFF),
    }
}

fn dark(role: SemanticColor) -> Color {
    match role {
        SemanticColor::Label => Color::WHITE,
        SemanticColor::SecondaryLabel => Color::new(0.922, 0.922, 0.961, 0.6),
        SemanticColor::TertiaryLabel => Color::new(0.922, 0.922, 0.961, 0.3),
        SemanticColor::PlaceholderText => Color::new(0.922, 0.922, 0.961, 0.3),
        SemanticColor::Separator => Color::new(0.329, 0.329, 0.345, 0.65),
        SemanticColor::Link => Color::from_hex(0x0A84FF),
        SemanticColor::SystemBackground => Color::BLACK,
        SemanticColor::SecondarySystemBackground => Color::from_hex(0x1C1C1E),
        SemanticColor::SystemFill => Color::new(0.471, 0.471, 0.502, 0.36),
        SemanticColor::Accent => Color::from_hex(0x0A84FF),
    }
}
