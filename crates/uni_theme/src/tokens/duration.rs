//! Animation duration token names

use crate::tokens::key::{TokenGroup, TokenKey};

/// Closed set of duration token names. Values are in seconds; conversion
/// to `std::time::Duration` is the consumer's choice.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
}

impl DurationToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
        }
    }

    pub const fn key(self) -> TokenKey {
        TokenKey::from_static(TokenGroup::Duration, self.name())
    }

    pub fn all() -> &'static [DurationToken] {
        const TOKENS: [DurationToken; 3] = [
            DurationToken::Fast,
            DurationToken::Normal,
            DurationToken::Slow,
        ];
        &TOKENS
    }
}
