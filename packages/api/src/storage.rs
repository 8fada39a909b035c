//! Durable credential storage.
//!
//! The session persists exactly three keys across page loads: the access
//! token, the refresh token, and the user id. On the web platform they live in
//! `localStorage`; native builds and tests use an in-memory map behind the
//! same trait.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The three persisted keys.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "accessToken";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const USER_ID: &str = "userId";

    pub const ALL: [&str; 3] = [ACCESS_TOKEN, REFRESH_TOKEN, USER_ID];
}

/// Key/value storage seam for credentials.
///
/// Reads and writes are best-effort: a storage that is unavailable (private
/// browsing, disabled localStorage) degrades to "no stored session" rather
/// than crashing the app.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove every persisted credential key.
    fn clear(&self) {
        for key in keys::ALL {
            self.remove(key);
        }
    }
}

/// Shared handle to a credential store. wasm is single-threaded, so `Rc` is
/// enough.
pub type SharedStore = Rc<dyn CredentialStore>;

/// In-memory store for native builds and unit tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `localStorage`-backed store for the web platform.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The store for the current platform: `localStorage` on the web, in-memory
/// elsewhere.
pub fn platform_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get(keys::ACCESS_TOKEN).is_none());

        store.set(keys::ACCESS_TOKEN, "tok");
        assert_eq!(store.get(keys::ACCESS_TOKEN).as_deref(), Some("tok"));

        store.remove(keys::ACCESS_TOKEN);
        assert!(store.get(keys::ACCESS_TOKEN).is_none());
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let store = MemoryStore::new();
        store.set(keys::ACCESS_TOKEN, "a");
        store.set(keys::REFRESH_TOKEN, "r");
        store.set(keys::USER_ID, "u");

        store.clear();

        for key in keys::ALL {
            assert!(store.get(key).is_none(), "{key} should be cleared");
        }
    }
}
