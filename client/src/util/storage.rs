//! Durable key/value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and UI preferences persist through [`KeyValueStore`] so
//! their logic runs unchanged against browser `localStorage` (hydrate) and an
//! in-memory map (server render, tests).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key/value persistence.
///
/// Implementations never fail loudly: an unavailable backend reads as empty
/// and reports writes as not persisted.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    /// Returns `false` when the value could not be persisted.
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Outside the browser it behaves as an empty,
/// read-only store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory store. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.write(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let Ok(mut entries) = self.entries.lock() else {
            return false;
        };
        entries.insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Load a JSON value for `key`; missing or malformed entries read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.read(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value for `key`. Returns `false` when nothing was persisted.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    let Ok(raw) = serde_json::to_string(value) else {
        return false;
    };
    store.write(key, &raw)
}
