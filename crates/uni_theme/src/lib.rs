//! Uni Theme Engine
//!
//! A token-based theming engine: applications reference semantic design
//! values (`primary` color, `medium` spacing, `headline` font) instead of
//! hard-coded constants, and the entire appearance swaps at runtime by
//! switching the active design system.
//!
//! # Overview
//!
//! The engine provides:
//! - **Design tokens**: colors (static and platform-semantic), spacing,
//!   radii, durations, asset references, fonts, gradients
//! - **Design systems**: immutable named bundles of token mappings
//! - **Live switching**: a [`ThemeManager`] with synchronous change
//!   notification and persistence of the user's choice
//! - **Typed resolution**: accessors that enforce the token kind and
//!   degrade predictably, per a runtime [`ResolvePolicy`]
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use uni_theme::{
//!     ColorToken, DesignSystemRegistry, MemorySettingsStore, ResolvePolicy, SpacingToken,
//!     ThemeManager, TokenResolver,
//! };
//!
//! // Construct once at app startup and share via your context/DI layer.
//! let manager = Arc::new(ThemeManager::new(
//!     DesignSystemRegistry::builtin(),
//!     Box::new(MemorySettingsStore::new()),
//! ));
//! let tokens = TokenResolver::new(Arc::clone(&manager), ResolvePolicy::default_for_build());
//!
//! let primary = tokens.color(ColorToken::Primary);
//! let gap = tokens.spacing(SpacingToken::Medium);
//!
//! // Swap the whole application's appearance.
//! manager.apply("Documentation");
//! assert_ne!(tokens.color(ColorToken::Primary), primary);
//! ```
//!
//! # Architecture
//!
//! [`DesignSystem`]s and the [`DesignSystemRegistry`] are immutable after
//! startup and freely shared. The manager is the only mutable state;
//! mutation belongs on the UI context, reads are safe anywhere. Token
//! lookups resolve against whatever system is active at call time, so a
//! view re-reading its tokens after a change notification picks up the
//! new values with no further plumbing.
//!
//! # Failure behavior
//!
//! Token resolution never leaks errors to consumers. Under
//! [`ResolvePolicy::FailFast`] (development) a missing or mistyped token
//! panics immediately; under [`ResolvePolicy::Degrade`] (release) it logs
//! and returns a conspicuous sentinel - bright magenta, never a
//! plausible-but-wrong value.

pub mod appearance;
pub mod error;
pub mod manager;
pub mod registry;
pub mod resolver;
pub mod semantic;
pub mod settings;
pub mod system;
pub mod systems;
pub mod tokens;

// Re-export commonly used types
pub use appearance::{Appearance, AppearanceProvider, FixedAppearance, SystemAppearance};
pub use error::{SemanticColorError, SettingsError, TokenError};
pub use manager::{ObserverId, ThemeManager, SELECTED_SYSTEM_KEY};
pub use registry::DesignSystemRegistry;
pub use resolver::{ResolvePolicy, TokenResolver};
pub use semantic::SemanticColorResolver;
pub use settings::{MemorySettingsStore, SettingsStore, TomlSettingsStore};
pub use system::{DesignSystem, DesignSystemBuilder};
pub use systems::BuiltinSystem;
pub use tokens::*;
