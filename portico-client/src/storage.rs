//! Persistence seam for the session scalars.
//!
//! The console persists exactly two identifiers (tenant and user) plus a
//! theme flag; everything else lives on the remote store. The SPA backs
//! this trait with browser local storage, tests with [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal string key/value store.
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written or was removed.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
    /// Remove a key; removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("portico.tenant"), None);

        store.set("portico.tenant", "7");
        assert_eq!(store.get("portico.tenant").as_deref(), Some("7"));

        store.set("portico.tenant", "9");
        assert_eq!(store.get("portico.tenant").as_deref(), Some("9"));

        store.remove("portico.tenant");
        assert_eq!(store.get("portico.tenant"), None);
        store.remove("portico.tenant");
    }
}
