//! Theme, session, and anonymous favorites stored outside the account mapping.

use beauty_box_core::{Email, ProductId, Theme};

use super::{KeyValueStore, StorageError, keys};

/// Repository for the single-value preferences.
pub struct PreferenceRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> PreferenceRepository<'a> {
    /// Create a new preference repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// The persisted theme; light when unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn theme(&self) -> Result<Theme, StorageError> {
        let stored = self.store.get_item(keys::THEME)?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    /// Persist the theme as its raw name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set_item(keys::THEME, theme.as_str())
    }

    /// Email of the persisted session, if any.
    ///
    /// A blank value counts as no session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn session_email(&self) -> Result<Option<Email>, StorageError> {
        Ok(self
            .store
            .get_item(keys::CURRENT_USER)?
            .and_then(|raw| Email::parse(&raw).ok()))
    }

    /// Persist the session email as a raw string.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn set_session_email(&self, email: &Email) -> Result<(), StorageError> {
        self.store.set_item(keys::CURRENT_USER, email.as_str())
    }

    /// Forget the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn clear_session_email(&self) -> Result<(), StorageError> {
        self.store.remove_item(keys::CURRENT_USER)
    }

    /// Favorites kept while signed out; empty when unset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serde` if the stored list is malformed.
    pub fn anonymous_favorites(&self) -> Result<Vec<ProductId>, StorageError> {
        match self.store.get_item(keys::ANON_FAVORITES)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the signed-out favorites.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn set_anonymous_favorites(&self, favorites: &[ProductId]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set_item(keys::ANON_FAVORITES, &raw)
    }
}
