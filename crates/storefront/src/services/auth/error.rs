//! Authentication error types.

use thiserror::Error;

use crate::store::StorageError;

/// Errors that can occur during local sign-in and registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password left blank.
    #[error("Please enter email and password.")]
    MissingFields,

    /// Registration with an email that already has an account.
    #[error("An account with this email already exists.")]
    DuplicateAccount,

    /// No such account, or the password does not match.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The account mapping could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Whether the user can fix this by editing the form.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
