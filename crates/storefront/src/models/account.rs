//! Local account record.
//!
//! **Insecure demo logic.** Passwords are stored and compared in plaintext.
//! The local account store exists so that favorites can be kept per person
//! on a shared machine; it is not an authentication mechanism and must not
//! be treated as one.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use beauty_box_core::{Email, ProductId};

/// Account mapping persisted as one JSON object, keyed by email.
pub type AccountMap = BTreeMap<Email, Account>;

/// A local account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
    /// Favorite product IDs in the order they were added.
    #[serde(default, deserialize_with = "lenient_ids")]
    pub favorites: Vec<ProductId>,
}

impl Account {
    /// Create an account with no favorites.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            favorites: Vec::new(),
        }
    }

    /// Plaintext comparison, see the module docs.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("password", &"[REDACTED]")
            .field("favorites", &self.favorites)
            .finish()
    }
}

/// A non-array `favorites` value is treated as empty, and non-integer
/// entries are skipped.
fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_i64)
            .map(ProductId::new)
            .collect(),
        _ => Vec::new(),
    })
}
