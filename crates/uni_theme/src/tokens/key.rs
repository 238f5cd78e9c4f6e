//! Token keys - the structural identifier addressing one design token

use std::borrow::Cow;
use std::fmt;

/// The group half of a [`TokenKey`].
///
/// Groups partition the key space: `(spacing, small)` and `(radius, small)`
/// are distinct keys. The set is closed; adding a group is a source change
/// checked at every consumption site.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenGroup {
    Color,
    Spacing,
    Radius,
    Duration,
    Asset,
    Font,
    Gradient,
}

impl TokenGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::Duration => "duration",
            Self::Asset => "asset",
            Self::Font => "font",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for a single design token: a `(group, name)` pair.
///
/// Construction never fails. Equality and hashing are structural over both
/// fields; names are case-sensitive.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TokenKey {
    pub group: TokenGroup,
    pub name: Cow<'static, str>,
}

impl TokenKey {
    pub fn new(group: TokenGroup, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            group,
            name: name.into(),
        }
    }

    /// Allocation-free key from a static name, used by the closed token
    /// name enums.
    pub const fn from_static(group: TokenGroup, name: &'static str) -> Self {
        Self {
            group,
            name: Cow::Borrowed(name),
        }
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}
