//! `sessionStorage`-backed session store implementation.

use platform_host::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser session store backed by `window.sessionStorage`.
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn get_string(&self, key: &str) -> Option<String> {
        crate::bridge::session_get(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), String> {
        crate::bridge::session_set(key, value)
    }

    fn remove(&self, key: &str) {
        crate::bridge::session_remove(key);
    }
}
