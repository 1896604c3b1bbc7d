//! `window.localStorage` backend for the settings store.

use vergence_core::{SettingsStorage, StorageError};
use web_sys as web;

#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    /// Bind to the current window's storage. Private browsing modes and
    /// sandboxed frames may deny access; that leaves the backend unavailable.
    pub fn from_window() -> Self {
        let storage = web::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("[storage] localStorage denied: {:?}", e);
                None
            }
        });
        Self { storage }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl SettingsStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
