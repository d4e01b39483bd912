//! Browser-backed persistence for walkthrough progress.
//!
//! Everything here is best-effort: a missing or throwing `localStorage`
//! surfaces as an error value that callers log and move past, leaving the
//! session to run on in-memory state alone.

#[cfg(target_arch = "wasm32")]
use dungeon_copilot_engine::{CHECKBOX_KEY, SECTION_KEY};
use dungeon_copilot_engine::{ProgressStorage, SectionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
fn js_err(value: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Js(crate::dom::js_error_message(value))
}

/// `ProgressStorage` over the browser's `localStorage`.
///
/// Stateless; construct one wherever a handler needs to touch persistence.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ProgressStorage for BrowserStorage {
    type Error = StorageError;

    fn save_section(&self, section: SectionId) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage().map_err(|e| js_err(&e))?;
            storage
                .set_item(SECTION_KEY, &section.to_string())
                .map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = section;
            Err(StorageError::Unavailable)
        }
    }

    fn save_checkboxes(&self, snapshot: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage().map_err(|e| js_err(&e))?;
            storage
                .set_item(CHECKBOX_KEY, snapshot)
                .map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = snapshot;
            Err(StorageError::Unavailable)
        }
    }

    fn load_checkboxes(&self) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage().map_err(|e| js_err(&e))?;
            storage.get_item(CHECKBOX_KEY).map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage().map_err(|e| js_err(&e))?;
            storage.remove_item(CHECKBOX_KEY).map_err(|e| js_err(&e))?;
            storage.remove_item(SECTION_KEY).map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
