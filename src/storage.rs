//! Browser `localStorage` backing for the theme flag.
//!
//! Values are stored as raw strings (`light` / `dark`), not JSON, so pages
//! written before this crate keep their stored preference.

use cola_core::{ColaError, ColaResult, KeyValueStore};
use wasm_bindgen::JsValue;

use crate::js_error_message;

/// `localStorage` of the current window.
#[derive(Debug, Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> ColaResult<web_sys::Storage> {
        gloo::utils::window()
            .local_storage()
            .map_err(|e| storage_error("opening localStorage", &e))?
            .ok_or_else(|| ColaError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn load(&self, key: &str) -> ColaResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| storage_error("reading", &e))
    }

    fn save(&mut self, key: &str, value: &str) -> ColaResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| storage_error("writing", &e))
    }
}

fn storage_error(action: &str, err: &JsValue) -> ColaError {
    ColaError::Storage(format!("{} failed: {}", action, js_error_message(err)))
}
