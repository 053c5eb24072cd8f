//! Navigation state.

use serde::{Deserialize, Serialize};

/// The page currently shown in the content region.
///
/// Entering [`Page::Home`] or [`Page::Favorites`] runs that page's fetch
/// immediately; [`Page::Search`] waits for the user to submit the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Search,
    Favorites,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Favorites => "favorites",
        }
    }

    /// Route that renders this page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search",
            Self::Favorites => "/favorites",
        }
    }
}
