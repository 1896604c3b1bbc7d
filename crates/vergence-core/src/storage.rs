//! Key-value storage backends for the settings blob.
//!
//! The trait mirrors the Web Storage API (`getItem`/`setItem`) so the browser
//! host can implement it directly over `window.localStorage`.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use thiserror::Error;

/// Fixed key under which the settings record is stored.
pub const SETTINGS_KEY: &str = "red-green-exercise-settings";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available in this context")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

pub trait SettingsStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: SettingsStorage + ?Sized> SettingsStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<T: SettingsStorage + ?Sized> SettingsStorage for std::rc::Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-process storage used by native hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<FnvHashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes fail, like a browser with an exhausted quota.
    pub fn failing_writes() -> Self {
        let storage = Self::default();
        storage.reject_writes.set(true);
        storage
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl SettingsStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Stand-in for environments without any storage medium.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStorage;

impl SettingsStorage for NoStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
