//! Engine error types
//!
//! These errors stay inside the engine: the typed accessors of the
//! resolver convert them into panics or documented fallback values
//! according to the active [`ResolvePolicy`](crate::ResolvePolicy), so no
//! error type ever crosses into the view/consumer layer.

use thiserror::Error;

use crate::tokens::{SemanticColor, TokenKey, TokenKind};

/// Why a token request could not be satisfied.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No entry for the key in the active design system.
    #[error("token `{key}` not found in design system \"{system}\"")]
    NotFound { key: TokenKey, system: String },

    /// An entry exists but holds a different kind of value.
    #[error("token `{key}` holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: TokenKey,
        expected: TokenKind,
        found: TokenKind,
    },

    /// A semantic color token could not be resolved against the platform.
    #[error(transparent)]
    Semantic(#[from] SemanticColorError),
}

/// The platform could not supply an appearance-resolved color for a role.
#[derive(Debug, Error)]
#[error("semantic color `{role}` unavailable: {reason}")]
pub struct SemanticColorError {
    pub role: SemanticColor,
    pub reason: &'static str,
}

/// Error from the persisted-settings collaborator.
///
/// The theme manager treats persistence as best-effort and swallows these
/// with a warning; in-memory state is already correct for the session.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("settings could not be encoded: {0}")]
    Encode(#[from] toml::ser::Error),
}
