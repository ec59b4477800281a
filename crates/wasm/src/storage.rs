//! `ScrollStore` over the browser's `sessionStorage`.

use tocbar_traits::{ScrollStore, StoreError};
use wasm_bindgen::JsValue;

/// Session storage of the current browsing context.
///
/// Storage can be disabled by the user or by browser policy; every operation
/// then reports [`StoreError::Unavailable`] and the sidebar falls back to
/// centering the active entry.
#[derive(Debug, Clone)]
pub struct SessionStorageStore {
    storage: Option<web_sys::Storage>,
}

impl SessionStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| match window.session_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("sessionStorage is not accessible: {e:?}");
                None
            }
        });
        Self { storage }
    }

    pub fn from_storage(storage: web_sys::Storage) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("sessionStorage is disabled".to_string()))
    }
}

impl Default for SessionStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn backend_error(key: &str, err: JsValue) -> StoreError {
    StoreError::Backend {
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

impl ScrollStore for SessionStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| backend_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| backend_error(key, e))
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| backend_error(key, e))
    }

    fn name(&self) -> &'static str {
        "SessionStorageStore"
    }
}
