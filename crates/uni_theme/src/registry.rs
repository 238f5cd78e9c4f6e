//! The fixed catalog of design systems an application ships

use std::sync::Arc;

use crate::system::DesignSystem;
use crate::systems::BuiltinSystem;

/// Ordered, read-only list of every [`DesignSystem`] known to the
/// application, built once at startup.
///
/// The first entry is the designated default, selected when no valid
/// persisted choice exists.
#[derive(Clone, Debug)]
pub struct DesignSystemRegistry {
    systems: Vec<Arc<DesignSystem>>,
}

impl DesignSystemRegistry {
    /// Build a registry from an ordered list of systems.
    ///
    /// # Panics
    ///
    /// Panics when `systems` is empty - the registry is assembled from
    /// compiled-in systems at startup, so an empty list is a programmer
    /// error, not a runtime condition.
    pub fn new(systems: Vec<DesignSystem>) -> Self {
        assert!(
            !systems.is_empty(),
            "a design system registry needs at least one system"
        );
        Self {
            systems: systems.into_iter().map(Arc::new).collect(),
        }
    }

    /// The catalog shipped with this library: Default and Documentation.
    pub fn builtin() -> Self {
        Self::new(
            BuiltinSystem::all()
                .iter()
                .map(|system| system.build())
                .collect(),
        )
    }

    /// Find a system by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<DesignSystem>> {
        self.systems
            .iter()
            .find(|system| system.name() == name)
            .cloned()
    }

    /// The designated default (first entry).
    pub fn default_system(&self) -> Arc<DesignSystem> {
        Arc::clone(&self.systems[0])
    }

    /// System names in registry order, for theme-picker UIs.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(|system| system.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DesignSystem>> {
        self.systems.iter()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
