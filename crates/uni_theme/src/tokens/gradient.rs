//! Gradient token names

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of gradient token names.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum GradientToken {
    Hero,
    AccentWash,
}

impl GradientToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::AccentWash => "accent-wash",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Gradient, self.name())
    }

    pub fn all() -> &'static [GradientToken] {
        const TOKENS: [GradientToken; 2] = [GradientToken::Hero, GradientToken::AccentWash];
        &TOKENS
    }
}
