//! Spacing token names

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of spacing token names. Values are in points.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Small,
    Medium,
    Large,
    Xl,
}

impl SpacingToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xl => "xl",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Spacing, self.name())
    }

    pub fn all() -> &'static [SpacingToken] {
        const TOKENS: [SpacingToken; 5] = [
            SpacingToken::Xs,
            SpacingToken::Small,
            SpacingToken::Medium,
            SpacingToken::Large,
            SpacingToken::Xl,
        ];
        &TOKENS
    }
}
