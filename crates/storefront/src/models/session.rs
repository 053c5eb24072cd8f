//! The signed-in user.

use serde::{Deserialize, Serialize};

use beauty_box_core::Email;

/// Identity of the active session.
///
/// At most one exists at a time. Its email always names an entry of the
/// persisted account mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Key of the backing account.
    pub email: Email,
}

impl CurrentUser {
    #[must_use]
    pub const fn new(email: Email) -> Self {
        Self { email }
    }

    /// Short name for the page header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.local_part()
    }
}
