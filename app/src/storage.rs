//! Browser `localStorage` backend for quest progress.

use morph_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage`. Every call re-resolves the handle, so a storage
/// area that is disabled mid-session degrades the same way as one that was
/// never there.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?.set_item(key, value).map_err(js_error)
    }
}
