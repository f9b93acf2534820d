//! Key-value storage surface with automatic JSON serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Prefix under which every shop key lives.
pub const DEFAULT_NAMESPACE: &str = "douceur";

/// A string key-value store.
///
/// The browser's `localStorage` is the production backend; tests and native
/// tooling use [`MemoryStore`]. Writes are last-write-wins: nothing
/// coordinates concurrent tabs.
pub trait KeyValueStore {
    /// Read the raw value under a key.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value under a key.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Read and deserialize a JSON document.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a JSON document.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        self.set_raw(key, &serde_json::to_string(value)?)
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Helper to build namespaced keys.
///
/// ```rust,ignore
/// let key = store_key!("douceur", "cart");
/// // "douceur:cart"
/// ```
#[macro_export]
macro_rules! store_key {
    ($namespace:expr, $($part:expr),+) => {{
        let mut key = String::from($namespace);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

/// In-memory backend for tests and native tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Browser backend over `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// Open the window's local storage.
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|_| StoreError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|_| StoreError::Backend(format!("get_item failed for {key}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StoreError::Backend(format!("set_item failed for {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StoreError::Backend(format!("remove_item failed for {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set_raw("k", "v").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), None);
    }

    #[test]
    fn test_json_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Doc {
            n: u32,
        }

        let store = MemoryStore::new();
        store.set_json("doc", &Doc { n: 7 }).unwrap();
        let loaded: Option<Doc> = store.get_json("doc").unwrap();
        assert_eq!(loaded, Some(Doc { n: 7 }));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<u32> = store.get_json("missing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!(DEFAULT_NAMESPACE, "cart"), "douceur:cart");
        assert_eq!(store_key!("shop", "orders", 2), "shop:orders:2");
    }

    #[test]
    fn test_borrowed_store_shares_state() {
        let store = MemoryStore::new();
        let borrowed = &store;
        borrowed.set_raw("k", "v").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v"));
    }
}
