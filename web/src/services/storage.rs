//! Token persistence in `window.localStorage`

use lib_core::{AppError, Result, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::utils::constants::TOKEN_STORAGE_KEY;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

fn js_error(action: &str, e: JsValue) -> AppError {
    AppError::Storage(format!("Failed to {action} token: {e:?}"))
}

fn local_storage() -> Result<Storage> {
    let window = web_sys::window().ok_or_else(|| AppError::Storage("No window available".to_string()))?;
    window
        .local_storage()
        .map_err(|e| js_error("open storage for", e))?
        .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>> {
        local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|e| js_error("read", e))
    }

    fn save(&self, token: &str) -> Result<()> {
        local_storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|e| js_error("save", e))
    }

    fn clear(&self) -> Result<()> {
        local_storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|e| js_error("remove", e))
    }
}
