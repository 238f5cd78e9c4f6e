//! System appearance (light/dark) sources

/// The display appearance the system is rendering for.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Source of the current display appearance.
///
/// Implementations must answer from live state on every call. Semantic
/// color resolution never caches, so a caching provider would reintroduce
/// exactly the stale-appearance bugs the resolver exists to avoid.
pub trait AppearanceProvider: Send + Sync {
    /// The current appearance, or `None` when it cannot be determined
    /// (headless session, unsupported platform).
    fn current_appearance(&self) -> Option<Appearance>;
}

/// Queries the operating system on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAppearance;

impl AppearanceProvider for SystemAppearance {
    fn current_appearance(&self) -> Option<Appearance> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(Appearance::Dark),
            dark_light::Mode::Light => Some(Appearance::Light),
            dark_light::Mode::Default => None,
        }
    }
}

/// A fixed appearance, for tests and for rendering a non-active
/// appearance (thumbnails, previews).
#[derive(Clone, Copy, Debug)]
pub struct FixedAppearance(pub Appearance);

impl AppearanceProvider for FixedAppearance {
    fn current_appearance(&self) -> Option<Appearance> {
        Some(self.0)
    }
}

/// A provider that never resolves, for exercising fallback paths.
#[derive(Clone, Copy, Debug)]
pub struct UnknownAppearance;

impl AppearanceProvider for UnknownAppearance {
    fn current_appearance(&self) -> Option<Appearance> {
        None
    }
}
