//! Design systems - immutable named bundles of token mappings

use rustc_hash::FxHashMap;
use uni_core::{Color, Gradient};

use crate::tokens::{
    AssetToken, ColorToken, DesignToken, DurationToken, FontDescription, FontToken, GradientToken,
    RadiusToken, SemanticColor, SpacingToken, TokenKey,
};

/// A complete, named visual theme: one mapping from [`TokenKey`] to
/// [`DesignToken`] plus a side mapping for font descriptions.
///
/// Immutable once built. Identity is the name; the registry guarantees
/// names are unique within an application. Construction does not validate
/// completeness - a missing token is a resolution-time condition handled
/// by the resolver's policy.
#[derive(Clone, Debug)]
pub struct DesignSystem {
    name: String,
    tokens: FxHashMap<TokenKey, DesignToken>,
    fonts: FxHashMap<TokenKey, FontDescription>,
}

impl DesignSystem {
    pub fn builder(name: impl Into<String>) -> DesignSystemBuilder {
        DesignSystemBuilder {
            name: name.into(),
            tokens: FxHashMap::default(),
            fonts: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pure map lookup; no fallback logic.
    pub fn lookup_token(&self, key: &TokenKey) -> Option<&DesignToken> {
        self.tokens.get(key)
    }

    /// Pure map lookup; no fallback logic.
    pub fn lookup_font(&self, key: &TokenKey) -> Option<&FontDescription> {
        self.fonts.get(key)
    }
}

/// Builder for [`DesignSystem`].
///
/// Duplicate keys follow a first-wins policy: once a key is present,
/// later entries for it are dropped silently. This lets a base token set
/// be extended with overrides listed first.
pub struct DesignSystemBuilder {
    name: String,
    tokens: FxHashMap<TokenKey, DesignToken>,
    fonts: FxHashMap<TokenKey, FontDescription>,
}

impl DesignSystemBuilder {
    /// Insert a token under a raw key. First entry wins.
    pub fn token(mut self, key: TokenKey, value: DesignToken) -> Self {
        self.tokens.entry(key).or_insert(value);
        self
    }

    /// Insert a font description. First entry wins.
    pub fn font_token(mut self, key: TokenKey, description: FontDescription) -> Self {
        self.fonts.entry(key).or_insert(description);
        self
    }

    pub fn color(self, token: ColorToken, color: Color) -> Self {
        self.token(token.key(), DesignToken::Color(color))
    }

    pub fn semantic_color(self, token: ColorToken, role: SemanticColor) -> Self {
        self.token(token.key(), DesignToken::SemanticColor(role))
    }

    pub fn spacing(self, token: SpacingToken, points: f32) -> Self {
        self.token(token.key(), DesignToken::Spacing(points))
    }

    pub fn radius(self, token: RadiusToken, points: f32) -> Self {
        self.token(token.key(), DesignToken::Radius(points))
    }

    pub fn duration(self, token: DurationToken, seconds: f32) -> Self {
        self.token(token.key(), DesignToken::Duration(seconds))
    }

    pub fn asset(self, token: AssetToken, reference: impl Into<String>) -> Self {
        self.token(token.key(), DesignToken::Asset(reference.into()))
    }

    pub fn gradient(self, token: GradientToken, gradient: Gradient) -> Self {
        self.token(token.key(), DesignToken::Gradient(gradient))
    }

    pub fn font(self, token: FontToken, description: FontDescription) -> Self {
        self.font_token(token.key(), description)
    }

    pub fn build(self) -> DesignSystem {
        DesignSystem {
            name: self.name,
            tokens: self.tokens,
            fonts: self.fonts,
        }
    }
}
