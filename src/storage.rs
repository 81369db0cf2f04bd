//! Durable string-keyed storage boundary.
//!
//! The persistence adapter talks to this trait only. The reference shell
//! runs in a browser and uses localStorage; tests and native harnesses use
//! the in-memory store.

use std::collections::HashMap;

use thiserror::Error;

/// Failure at the storage boundary (e.g. quota exceeded, backend missing).
///
/// Callers degrade to "save skipped, retry next interval" — this error never
/// propagates out of the persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal get/set/remove over string keys and values.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and native harnesses.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser localStorage, for the wasm shell.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let backend = Self::backend().ok_or(StorageError::Unavailable)?;
        backend
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) {
        if let Some(backend) = Self::backend() {
            let _ = backend.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }

    #[test]
    fn memory_store_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k");
        assert!(store.get("k").is_none());
        assert!(store.is_empty());
        // Removing a missing key is fine.
        store.remove("k");
    }
}
