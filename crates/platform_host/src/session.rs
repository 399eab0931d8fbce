//! Session-scoped key/value storage used for per-tab desktop overrides.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::Serialize;

/// Session key overriding the configured desktop background image.
pub const SESSION_BACKGROUND_KEY: &str = "desktop.background";
/// Session key overriding the configured document title.
pub const SESSION_TITLE_KEY: &str = "desktop.title";
/// Session key overriding the configured theme color.
pub const SESSION_THEME_COLOR_KEY: &str = "desktop.theme_color";
/// Background override key written by existing content scripts; read after [`SESSION_BACKGROUND_KEY`].
pub const LEGACY_SESSION_BACKGROUND_KEY: &str = "yesterplay_background";
/// Title override key written by existing content scripts; read after [`SESSION_TITLE_KEY`].
pub const LEGACY_SESSION_TITLE_KEY: &str = "yesterplay_title";
/// Theme color override key written by existing content scripts; read after
/// [`SESSION_THEME_COLOR_KEY`].
pub const LEGACY_SESSION_THEME_COLOR_KEY: &str = "yesterplay_theme_color";
/// Session key holding the last configuration document the desktop booted from.
pub const SESSION_CONFIG_KEY: &str = "desktop.config";

/// Synchronous string store scoped to the current browsing session.
pub trait SessionStore {
    /// Reads the raw value stored under `key`.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write.
    fn set_string(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes `key`. Missing keys are not an error.
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Session store that never holds anything.
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn get_string(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_string(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self, _key: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory session store for native targets and tests.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemorySessionStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

/// Serializes `value` as JSON and stores it under `key`.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_session_typed<S: SessionStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set_string(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemorySessionStore::default();
        store
            .set_string(SESSION_TITLE_KEY, "My Desktop")
            .expect("set");
        assert_eq!(
            store.get_string(SESSION_TITLE_KEY),
            Some("My Desktop".to_string())
        );
        store.remove(SESSION_TITLE_KEY);
        assert_eq!(store.get_string(SESSION_TITLE_KEY), None);
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = MemorySessionStore::default();
        let other = store.clone();
        store.set_string("k", "v").expect("set");
        assert_eq!(other.get_string("k"), Some("v".to_string()));
    }

    #[test]
    fn typed_save_stores_json() {
        let store = MemorySessionStore::default();
        save_session_typed(&store, "count", &vec![3_u32, 4]).expect("save");
        assert_eq!(store.get_string("count"), Some("[3,4]".to_string()));
    }
}
