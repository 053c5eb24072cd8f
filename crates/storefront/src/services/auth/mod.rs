//! Local authentication service.
//!
//! **Insecure demo logic.** Accounts live in the local store with plaintext
//! passwords (see [`crate::models::account`]). Sign-in only selects whose
//! favorites list is active; it protects nothing.

mod error;

pub use error::AuthError;

use beauty_box_core::{Email, ProductId};

use crate::models::Account;
use crate::store::KeyValueStore;
use crate::store::accounts::AccountRepository;

/// Authentication service.
///
/// Handles registration and sign-in against the persisted account mapping.
/// Session bookkeeping is left to the caller.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            accounts: AccountRepository::new(store),
        }
    }

    /// Register a new account with no favorites.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::DuplicateAccount` if the email is already registered;
    /// the existing record is left untouched.
    pub fn register(&self, email: &str, password: &str) -> Result<Email, AuthError> {
        let email = validate_fields(email, password)?;

        if !self.accounts.create(&email, Account::new(password))? {
            return Err(AuthError::DuplicateAccount);
        }

        tracing::info!(email = %email, "Registered local account");
        Ok(email)
    }

    /// Check credentials and return the account's favorites.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` if the account does not exist
    /// or the password does not match.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(Email, Vec<ProductId>), AuthError> {
        let email = validate_fields(email, password)?;

        let account = self
            .accounts
            .get(&email)?
            .filter(|account| account.password_matches(password))
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(email = %email, "Signed in to local account");
        Ok((email, account.favorites))
    }

    /// Favorites of an existing account, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the mapping cannot be loaded.
    pub fn favorites_of(&self, email: &Email) -> Result<Option<Vec<ProductId>>, AuthError> {
        Ok(self.accounts.get(email)?.map(|account| account.favorites))
    }

    /// Persist an account's favorites.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the mapping cannot be saved.
    pub fn save_favorites(&self, email: &Email, favorites: &[ProductId]) -> Result<(), AuthError> {
        self.accounts.set_favorites(email, favorites)?;
        Ok(())
    }
}

/// Trimmed email must be non-empty; the password is taken as typed.
fn validate_fields(email: &str, password: &str) -> Result<Email, AuthError> {
    if password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Email::parse(email).map_err(|_| AuthError::MissingFields)
}
