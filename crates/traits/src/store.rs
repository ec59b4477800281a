//! ScrollStore trait for abstracting the session-scoped key/value slot.
//!
//! The sidebar persists its scroll offset across navigations through this
//! trait instead of reaching for a global storage object, so the browser's
//! session storage, an in-memory map, or any other backend can be injected.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation on '{key}' failed: {message}")]
    Backend { key: String, message: String },
}

/// A session-scoped string key/value store.
///
/// # Implementations
///
/// - `InMemoryScrollStore`: a process-local map (always available)
/// - `SessionStorageStore` in `tocbar-wasm`: the browser's `sessionStorage`
///
/// Methods take `&self`; backends use interior mutability, matching how the
/// browser API behaves.
pub trait ScrollStore: Debug {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn clear(&self, key: &str) -> Result<(), StoreError>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryScrollStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryScrollStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored keys.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }

    fn poisoned(key: &str) -> StoreError {
        StoreError::Backend {
            key: key.to_string(),
            message: "store lock poisoned".to_string(),
        }
    }
}

impl ScrollStore for InMemoryScrollStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryScrollStore"
    }
}
