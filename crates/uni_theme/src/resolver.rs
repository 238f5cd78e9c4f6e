//! Typed token resolution
//!
//! The resolver is the only path consumers take to read tokens: each
//! accessor fixes the token group at compile time, looks the key up in
//! the active design system, and enforces the expected value kind. What
//! happens on a miss or a kind mismatch is decided by the
//! [`ResolvePolicy`] the resolver was built with, so both behaviors are
//! exercisable in tests without rebuilding.

use std::sync::Arc;

use uni_core::{Color, Gradient};

use crate::appearance::AppearanceProvider;
use crate::error::TokenError;
use crate::manager::ThemeManager;
use crate::semantic::SemanticColorResolver;
use crate::tokens::{
    AssetToken, ColorToken, DesignToken, DurationToken, FontDescription, FontToken, GradientToken,
    RadiusToken, SpacingToken, TokenKey, TokenKind,
};

/// How the resolver reacts to an unresolvable token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvePolicy {
    /// Panic with the offending key. For development: a missing or
    /// mistyped token is an authoring error that should be caught before
    /// release.
    FailFast,
    /// Log the failure and return a documented, conspicuous sentinel
    /// (magenta for colors, zero for numerics, an empty asset
    /// reference). A shipped application never crashes over one bad
    /// token; it renders visibly wrong instead.
    Degrade,
}

impl ResolvePolicy {
    /// [`FailFast`](Self::FailFast) in debug builds,
    /// [`Degrade`](Self::Degrade) in release builds.
    pub fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::FailFast
        } else {
            Self::Degrade
        }
    }
}

/// Typed accessor layer over a [`ThemeManager`].
///
/// Accessors are idempotent and side-effect-free apart from diagnostics;
/// they never mutate the manager or the design system, and they always
/// return a concrete value of the requested kind.
pub struct TokenResolver {
    manager: Arc<ThemeManager>,
    policy: ResolvePolicy,
    semantic: SemanticColorResolver,
}

impl TokenResolver {
    pub fn new(manager: Arc<ThemeManager>, policy: ResolvePolicy) -> Self {
        Self {
            manager,
            policy,
            semantic: SemanticColorResolver::system(),
        }
    }

    /// Replace the appearance source used for semantic colors (tests,
    /// rendering a non-active appearance).
    pub fn with_appearance_provider(mut self, provider: Box<dyn AppearanceProvider>) -> Self {
        self.semantic = SemanticColorResolver::new(provider);
        self
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    // ========== Typed accessors ==========

    /// Resolve a color token, static or semantic.
    ///
    /// A failed semantic resolution degrades to the role's documented
    /// fallback rather than the global magenta sentinel, so production
    /// text stays readable even when the platform query fails.
    pub fn color(&self, token: ColorToken) -> Color {
        let key = token.key();
        match self.try_color(&key) {
            Ok(color) => color,
            Err(TokenError::Semantic(err)) => {
                let fallback = err.role.fallback();
                self.recover(TokenError::Semantic(err), fallback)
            }
            Err(err) => self.recover(err, Color::MAGENTA),
        }
    }

    /// Resolve a spacing token, in points.
    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.numeric(token.key(), TokenKind::Spacing)
    }

    /// Resolve a radius token, in points.
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.numeric(token.key(), TokenKind::Radius)
    }

    /// Resolve a duration token, in seconds.
    pub fn duration(&self, token: DurationToken) -> f32 {
        self.numeric(token.key(), TokenKind::Duration)
    }

    /// Resolve an asset reference. The reference is not validated against
    /// the asset store.
    pub fn asset(&self, token: AssetToken) -> String {
        let key = token.key();
        let result = self.token(&key).and_then(|token| match token {
            DesignToken::Asset(reference) => Ok(reference),
            other => Err(self.mismatch(&key, TokenKind::Asset, &other)),
        });
        result.unwrap_or_else(|err| self.recover(err, String::new()))
    }

    /// Resolve a font token to its description. Materialization into a
    /// renderable font - including dynamic text scaling - happens in the
    /// host's font provider at render time.
    pub fn font(&self, token: FontToken) -> FontDescription {
        let key = token.key();
        let system = self.manager.current();
        match system.lookup_font(&key) {
            Some(description) => description.clone(),
            None => {
                let err = TokenError::NotFound {
                    key,
                    system: system.name().to_string(),
                };
                self.recover(err, FontDescription::fallback())
            }
        }
    }

    /// Resolve a gradient token to its stop list and geometry. No
    /// interpolation or materialization happens here.
    pub fn gradient(&self, token: GradientToken) -> Gradient {
        let key = token.key();
        let result = self.token(&key).and_then(|token| match token {
            DesignToken::Gradient(gradient) => Ok(gradient),
            other => Err(self.mismatch(&key, TokenKind::Gradient, &other)),
        });
        result.unwrap_or_else(|err| {
            self.recover(err, Gradient::simple(Color::MAGENTA, Color::MAGENTA))
        })
    }

    /// Raw-key lookup escape hatch for tooling and debugging.
    ///
    /// No policy applies and semantic colors are returned unresolved;
    /// application code should use the typed accessors.
    pub fn lookup_raw(&self, key: &TokenKey) -> Option<DesignToken> {
        self.manager.current().lookup_token(key).cloned()
    }

    // ========== Internals ==========

    fn try_color(&self, key: &TokenKey) -> Result<Color, TokenError> {
        match self.token(key)? {
            DesignToken::Color(color) => Ok(color),
            DesignToken::SemanticColor(role) => Ok(self.semantic.resolve(role)?),
            other => Err(self.mismatch(key, TokenKind::Color, &other)),
        }
    }

    fn numeric(&self, key: TokenKey, expected: TokenKind) -> f32 {
        let result = self.token(&key).and_then(|token| match (expected, token) {
            (TokenKind::Spacing, DesignToken::Spacing(value)) => Ok(value),
            (TokenKind::Radius, DesignToken::Radius(value)) => Ok(value),
            (TokenKind::Duration, DesignToken::Duration(value)) => Ok(value),
            (_, other) => Err(self.mismatch(&key, expected, &other)),
        });
        result.unwrap_or_else(|err| self.recover(err, 0.0))
    }

    fn token(&self, key: &TokenKey) -> Result<DesignToken, TokenError> {
        let system = self.manager.current();
        system
            .lookup_token(key)
            .cloned()
            .ok_or_else(|| TokenError::NotFound {
                key: key.clone(),
                system: system.name().to_string(),
            })
    }

    fn mismatch(&self, key: &TokenKey, expected: TokenKind, found: &DesignToken) -> TokenError {
        TokenError::TypeMismatch {
            key: key.clone(),
            expected,
            found: found.kind(),
        }
    }

    /// Apply the failure policy: panic under FailFast, log and return the
    /// sentinel under Degrade.
    fn recover<T>(&self, err: TokenError, sentinel: T) -> T {
        match self.policy {
            ResolvePolicy::FailFast => panic!("design token resolution failed: {err}"),
            ResolvePolicy::Degrade => {
                tracing::error!(%err, "token resolution degraded to fallback");
                sentinel
            }
        }
    }
}
