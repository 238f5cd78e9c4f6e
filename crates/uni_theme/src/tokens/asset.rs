//! Asset reference token names

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of asset token names.
///
/// Asset tokens hold string identifiers into the application's asset
/// store; the engine does not validate that a reference exists.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AssetToken {
    Logo,
    LogoMark,
    Placeholder,
}

impl AssetToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::LogoMark => "logo-mark",
            Self::Placeholder => "placeholder",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Asset, self.name())
    }

    pub fn all() -> &'static [AssetToken] {
        const TOKENS: [AssetToken; 3] = [
            AssetToken::Logo,
            AssetToken::LogoMark,
            AssetToken::Placeholder,
        ];
        &TOKENS
    }
}
