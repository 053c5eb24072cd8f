//! Persisted local state.
//!
//! The storefront keeps everything it owns in one string key-value store with
//! browser `localStorage` semantics: values are opaque strings, reads of
//! missing keys return `None`, and every write replaces the whole value.
//!
//! ## Keys
//!
//! | key               | value                                              |
//! |-------------------|----------------------------------------------------|
//! | `theme`           | raw `light` / `dark`                               |
//! | `bb_users`        | JSON object: email → `{"password", "favorites"}`   |
//! | `bb_current_user` | raw email of the active session                    |
//! | `favorites_anon`  | JSON array of product IDs                          |
//!
//! ## Backends
//!
//! - [`FileStore`] - JSON file on disk, rewritten on every mutation
//! - [`MemoryStore`] - process memory, used by tests
//!
//! Typed access goes through the repositories in [`accounts`] and
//! [`preferences`].

pub mod accounts;
mod file;
mod memory;
pub mod preferences;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value (or the backing file) is not valid JSON of the expected shape.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A string key-value store with `localStorage` semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Keys of the persisted values.
pub mod keys {
    /// Light/dark preference.
    pub const THEME: &str = "theme";

    /// Serialized account mapping.
    pub const USERS: &str = "bb_users";

    /// Email of the active session.
    pub const CURRENT_USER: &str = "bb_current_user";

    /// Favorites used while signed out.
    pub const ANON_FAVORITES: &str = "favorites_anon";
}
