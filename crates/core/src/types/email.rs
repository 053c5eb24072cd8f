//! Account email type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input is empty after trimming surrounding whitespace.
    #[error("email cannot be empty")]
    Empty,
}

/// The key of a local account.
///
/// Accounts are keyed by whatever the user typed into the sign-in form, trimmed
/// of surrounding whitespace. No structural validation is applied: the local
/// account store accepts any non-empty key, so `"alice"` is as valid as
/// `"alice@example.com"`.
///
/// ## Examples
///
/// ```
/// use beauty_box_core::Email;
///
/// let email = Email::parse("  a@x.com ").unwrap();
/// assert_eq!(email.as_str(), "a@x.com");
/// assert_eq!(email.local_part(), "a");
///
/// assert!(Email::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Empty`] if nothing remains after trimming.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the part before the first `@`, or the whole key if there is none.
    ///
    /// Used as the short display name in the page header.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
