//! Live theme switching
//!
//! One [`ThemeManager`] per running application, constructed explicitly
//! and handed to consumers through the app's own context or DI layer -
//! there is no global instance. The manager owns which design system is
//! active, notifies observers synchronously on a switch, and persists the
//! user's choice best-effort.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::registry::DesignSystemRegistry;
use crate::settings::SettingsStore;
use crate::system::DesignSystem;

/// Persisted-setting key holding the name of the last applied system.
pub const SELECTED_SYSTEM_KEY: &str = "com.uni.theme.selectedTheme";

/// Handle returned by [`ThemeManager::subscribe`], used to unsubscribe.
pub type ObserverId = u64;

type Observer = Arc<dyn Fn(&DesignSystem) + Send + Sync>;

/// Owns the active design system for one application.
///
/// The current system is always a member of the registry, by
/// construction. Reads never block on anything but an uncontended lock
/// and never fail. Mutation is expected from the UI context only; other
/// threads should hand off to it before calling [`apply`](Self::apply).
pub struct ThemeManager {
    registry: DesignSystemRegistry,
    store: Box<dyn SettingsStore>,
    current: RwLock<Arc<DesignSystem>>,
    observers: Mutex<Vec<(ObserverId, Observer)>>,
    next_observer: AtomicU64,
}

impl ThemeManager {
    /// Build the manager, restoring the persisted design-system choice.
    ///
    /// An absent or unknown persisted name selects the registry default;
    /// unknown names are logged since they usually mean a renamed system.
    pub fn new(registry: DesignSystemRegistry, store: Box<dyn SettingsStore>) -> Self {
        let current = match store.get_string(SELECTED_SYSTEM_KEY) {
            Some(name) => registry.get(&name).unwrap_or_else(|| {
                tracing::warn!(%name, "persisted design system not in registry, using default");
                registry.default_system()
            }),
            None => registry.default_system(),
        };

        Self {
            registry,
            store,
            current: RwLock::new(current),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
        }
    }

    /// The active design system.
    pub fn current(&self) -> Arc<DesignSystem> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// The registry of available systems, for theme-picker UIs.
    pub fn available(&self) -> &DesignSystemRegistry {
        &self.registry
    }

    /// Make `name` the active design system.
    ///
    /// An unknown name is logged and ignored - state is untouched and the
    /// call never fails. On an actual switch, observers run synchronously
    /// before this returns, then the choice is persisted. A failed
    /// persistence write is swallowed: the in-memory theme is already
    /// correct for the session.
    ///
    /// Re-applying the active system persists the name but does not
    /// re-notify.
    pub fn apply(&self, name: &str) {
        let Some(system) = self.registry.get(name) else {
            tracing::warn!(name, "apply: design system not found, ignoring");
            return;
        };

        let changed = {
            let mut current = self.current.write().unwrap();
            if current.name() == name {
                false
            } else {
                tracing::debug!(from = current.name(), to = name, "switching design system");
                *current = Arc::clone(&system);
                true
            }
        };

        if changed {
            self.notify(&system);
        }

        if let Err(err) = self.store.set_string(SELECTED_SYSTEM_KEY, name) {
            tracing::warn!(%err, "failed to persist design system choice");
        }
    }

    /// Register a change observer, called synchronously from [`apply`](Self::apply)
    /// with the newly active system.
    pub fn subscribe(&self, observer: impl Fn(&DesignSystem) + Send + Sync + 'static) -> ObserverId {
        let id = self.next_observer.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .unwrap()
            .push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers
            .lock()
            .unwrap()
            .retain(|(observer_id, _)| *observer_id != id);
    }

    fn notify(&self, system: &DesignSystem) {
        // snapshot so observers may re-enter the manager
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(system);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;

    fn manager() -> ThemeManager {
        ThemeManager::new(
            DesignSystemRegistry::builtin(),
            Box::new(MemorySettingsStore::new()),
        )
    }

    #[test]
    fn fresh_manager_selects_the_registry_default() {
        let manager = manager();
        assert_eq!(manager.current().name(), "Default");
    }

    #[test]
    fn current_is_always_a_registry_member() {
        let manager = manager();
        for name in ["Documentation", "NoSuchTheme", "Default"] {
            manager.apply(name);
            let current = manager.current();
            assert_eq!(
                manager
                    .available()
                    .names()
                    .filter(|n| *n == current.name())
                    .count(),
                1
            );
        }
    }

    #[test]
    fn unknown_names_are_ignored() {
        let manager = manager();
        manager.apply("Documentation");
        manager.apply("NoSuchTheme");
        assert_eq!(manager.current().name(), "Documentation");
    }

    #[test]
    fn observers_fire_once_per_actual_switch() {
        use std::sync::atomic::AtomicUsize;

        let manager = manager();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        manager.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.apply("Documentation");
        manager.apply("Documentation"); // re-apply: no notification
        manager.apply("NoSuchTheme"); // rejected: no notification
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribed_observers_stop_firing() {
        use std::sync::atomic::AtomicUsize;

        let manager = manager();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let id = manager.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        manager.unsubscribe(id);

        manager.apply("Documentation");
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_persisted_name_falls_back_to_default() {
        let store = MemorySettingsStore::new();
        store.set_string(SELECTED_SYSTEM_KEY, "Renamed").unwrap();
        let manager = ThemeManager::new(DesignSystemRegistry::builtin(), Box::new(store));
        assert_eq!(manager.current().name(), "Default");
    }
}
