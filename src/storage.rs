//! Browser Storage
//!
//! `KeyValueStorage` over `window.localStorage`.

use habit_core::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

/// Handle to the page's localStorage.
///
/// The `web_sys::Storage` object is looked up on every call, so the handle
/// itself holds no JS value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected(js_error(e)))
    }
}
