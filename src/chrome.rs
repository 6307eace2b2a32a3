/// `chrome.storage.local` access through the JS bridge

use crate::storage::{KeyValueStore, StorageError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bookmarks.js")]
extern "C" {
    fn hasStorage() -> bool;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// Extension-local storage of the hosting browser
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeStore;

impl KeyValueStore for ChromeStore {
    fn is_available(&self) -> bool {
        hasStorage()
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let value_js = getStorage(key)
            .await
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))?;

        if value_js.is_null() || value_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value_js)
            .map(Some)
            .map_err(|e| StorageError::Decode(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        // Plain JS objects rather than `Map`, so the stored shape stays JSON.
        let value_js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StorageError::Encode(format!("{:?}", e)))?;

        setStorage(key, value_js)
            .await
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}
