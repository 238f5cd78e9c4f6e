//! Persisted-settings collaborator
//!
//! The engine persists exactly one value: the name of the last applied
//! design system. The store is a narrow key-value trait so hosts can
//! plug in their own preference mechanism; two implementations ship here.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::error::SettingsError;

/// Minimal key-value persistence contract.
///
/// Writes are synchronous and best-effort from the engine's point of
/// view: the theme manager logs and swallows a failed write, because the
/// in-memory theme is already correct for the session.
pub trait SettingsStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set_string(key, value)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat TOML table on disk, loaded once and written through on change.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    values: Mutex<FxHashMap<String, String>>,
}

impl TomlSettingsStore {
    /// Open the store at `path`, starting from an empty table when the
    /// file is missing or unreadable (an unreadable file is logged, not
    /// an error - settings are reconstructible).
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str::<FxHashMap<String, String>>(&text) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "settings file unreadable, starting empty");
                    FxHashMap::default()
                }
            },
            Err(_) => FxHashMap::default(),
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &FxHashMap<String, String>) -> Result<(), SettingsError> {
        let text = toml::to_string(values)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get_string("missing"), None);
        store.set_string("a.b.c", "value").unwrap();
        assert_eq!(store.get_string("a.b.c"), Some("value".to_string()));
    }

    #[test]
    fn toml_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let store = TomlSettingsStore::load(&path);
        store.set_string("com.uni.theme.selectedTheme", "Documentation").unwrap();

        let reloaded = TomlSettingsStore::load(&path);
        assert_eq!(
            reloaded.get_string("com.uni.theme.selectedTheme"),
            Some("Documentation".to_string())
        );
    }

    #[test]
    fn toml_store_starts_empty_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = TomlSettingsStore::load(&path);
        assert_eq!(store.get_string("anything"), None);
    }
}
