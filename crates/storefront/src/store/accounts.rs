//! Account repository over the local store.
//!
//! The whole account mapping is read and written as one JSON value under
//! [`keys::USERS`]. Every mutation is a full read-modify-write.

use beauty_box_core::{Email, ProductId};

use super::{KeyValueStore, StorageError, keys};
use crate::models::{Account, AccountMap};

/// Repository for local account records.
pub struct AccountRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the full account mapping. A missing value is an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serde` if the stored mapping is malformed.
    pub fn load_all(&self) -> Result<AccountMap, StorageError> {
        match self.store.get_item(keys::USERS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(AccountMap::new()),
        }
    }

    /// Replace the full account mapping.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn save_all(&self, accounts: &AccountMap) -> Result<(), StorageError> {
        let raw = serde_json::to_string(accounts)?;
        self.store.set_item(keys::USERS, &raw)
    }

    /// Get one account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mapping cannot be loaded.
    pub fn get(&self, email: &Email) -> Result<Option<Account>, StorageError> {
        Ok(self.load_all()?.remove(email))
    }

    /// Insert a new account unless the email is taken.
    ///
    /// Returns `false` (and writes nothing) if an account already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mapping cannot be loaded or saved.
    pub fn create(&self, email: &Email, account: Account) -> Result<bool, StorageError> {
        let mut accounts = self.load_all()?;
        if accounts.contains_key(email) {
            return Ok(false);
        }
        accounts.insert(email.clone(), account);
        self.save_all(&accounts)?;
        Ok(true)
    }

    /// Overwrite an account's favorites.
    ///
    /// A missing account is recreated with an empty password so the favorites
    /// are not lost.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mapping cannot be loaded or saved.
    pub fn set_favorites(&self, email: &Email, favorites: &[ProductId]) -> Result<(), StorageError> {
        let mut accounts = self.load_all()?;
        accounts.entry(email.clone()).or_default().favorites = favorites.to_vec();
        self.save_all(&accounts)
    }
}
