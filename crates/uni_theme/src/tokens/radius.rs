//! Corner radius token names

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of radius token names. Values are in points.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Small,
    Medium,
    Large,
    Full,
}

impl RadiusToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Full => "full",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Radius, self.name())
    }

    pub fn all() -> &'static [RadiusToken] {
        const TOKENS: [RadiusToken; 5] = [
            RadiusToken::None,
            RadiusToken::Small,
            RadiusToken::Medium,
            RadiusToken::Large,
            RadiusToken::Full,
        ];
        &TOKENS
    }
}
