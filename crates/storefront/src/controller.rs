//! Root application state for one browser profile.
//!
//! All UI state (theme, session, working favorites, active page) lives in a
//! single [`AppController`]. Route handlers reach it through
//! [`AppState::controller`](crate::state::AppState::controller), which
//! serializes mutations; catalog requests are made without holding it.

use beauty_box_core::{Email, ProductId, Theme};

use crate::models::{CurrentUser, Page};
use crate::services::{AuthError, AuthService, FavoritesList, theme};
use crate::store::SharedStore;
use crate::store::preferences::PreferenceRepository;

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub id: ProductId,
    /// Membership after the toggle.
    pub is_favorite: bool,
    /// Size of the working list after the toggle.
    pub count: usize,
    /// The favorites page is showing and must be redrawn.
    pub rerender_favorites: bool,
}

/// Single-writer UI state.
pub struct AppController {
    store: SharedStore,
    theme: Theme,
    current_user: Option<CurrentUser>,
    favorites: FavoritesList,
    current_page: Page,
}

impl AppController {
    /// Load the theme and restore any persisted session.
    pub fn bootstrap(store: SharedStore) -> Self {
        let theme = theme::load(store.as_ref());
        let mut controller = Self {
            store,
            theme,
            current_user: None,
            favorites: FavoritesList::default(),
            current_page: Page::default(),
        };
        controller.restore_session();
        controller
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = theme::toggle(self.store.as_ref(), self.theme);
        self.theme
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// The working favorites list: the signed-in account's, or the anonymous one.
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    /// Record the page now shown in the content region.
    pub fn navigate(&mut self, page: Page) {
        if self.current_page != page {
            tracing::debug!(from = self.current_page.as_str(), to = page.as_str(), "Navigating");
        }
        self.current_page = page;
    }

    /// Toggle membership of `id` and persist to whichever list is active.
    ///
    /// A failed write is logged; the in-memory list keeps the new state.
    pub fn toggle_favorite(&mut self, id: ProductId) -> FavoriteToggle {
        let is_favorite = self.favorites.toggle(id);
        self.persist_favorites();

        tracing::info!(
            product_id = %id,
            is_favorite,
            signed_in = self.current_user.is_some(),
            "Toggled favorite"
        );

        FavoriteToggle {
            id,
            is_favorite,
            count: self.favorites.len(),
            rerender_favorites: self.current_page == Page::Favorites,
        }
    }

    /// Create an account and sign in to it with an empty favorites list.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if a field is blank, the email is taken, or the
    /// account mapping cannot be read or written. The session is unchanged.
    pub fn register(&mut self, email: &str, password: &str) -> Result<&CurrentUser, AuthError> {
        let email = AuthService::new(self.store.as_ref()).register(email, password)?;
        Ok(self.start_session(email, FavoritesList::default()))
    }

    /// Sign in and load the account's favorites.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if a field is blank or the credentials do not
    /// match. The session is unchanged.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&CurrentUser, AuthError> {
        let (email, favorites) = AuthService::new(self.store.as_ref()).sign_in(email, password)?;
        Ok(self.start_session(email, FavoritesList::new(favorites)))
    }

    /// End the session and switch back to the anonymous favorites.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(email = %user.email, "Signed out");
        }
        if let Err(e) = self.preferences().clear_session_email() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
        self.load_anonymous_favorites();
    }

    /// Reactivate the persisted session if its account still exists.
    ///
    /// Otherwise the anonymous favorites become the working list.
    pub fn restore_session(&mut self) {
        let email = self.preferences().session_email().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read persisted session");
            None
        });

        if let Some(email) = email {
            match AuthService::new(self.store.as_ref()).favorites_of(&email) {
                Ok(Some(favorites)) => {
                    tracing::info!(email = %email, "Restored session");
                    self.favorites = FavoritesList::new(favorites);
                    self.current_user = Some(CurrentUser::new(email));
                    return;
                }
                Ok(None) => {
                    tracing::debug!(email = %email, "Persisted session has no account");
                }
                Err(e) => {
                    tracing::warn!(error = %e, email = %email, "Failed to restore session");
                }
            }
        }

        self.current_user = None;
        self.load_anonymous_favorites();
    }

    fn start_session(&mut self, email: Email, favorites: FavoritesList) -> &CurrentUser {
        if let Err(e) = self.preferences().set_session_email(&email) {
            tracing::warn!(error = %e, email = %email, "Failed to persist session");
        }
        self.favorites = favorites;
        self.current_user.insert(CurrentUser::new(email))
    }

    fn load_anonymous_favorites(&mut self) {
        let ids = self.preferences().anonymous_favorites().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read anonymous favorites");
            Vec::new()
        });
        self.favorites = FavoritesList::new(ids);
    }

    fn persist_favorites(&self) {
        let ids = self.favorites.ids();
        let result = match &self.current_user {
            Some(user) => AuthService::new(self.store.as_ref()).save_favorites(&user.email, ids),
            None => self
                .preferences()
                .set_anonymous_favorites(ids)
                .map_err(AuthError::from),
        };
        if let Err(e) = result {
            tracing::error!(error = %e, "Failed to persist favorites");
        }
    }

    fn preferences(&self) -> PreferenceRepository<'_> {
        PreferenceRepository::new(self.store.as_ref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{KeyValueStore, MemoryStore, keys};

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    fn fresh() -> (Arc<MemoryStore>, AppController) {
        let store = Arc::new(MemoryStore::new());
        let controller = AppController::bootstrap(store.clone());
        (store, controller)
    }

    #[test]
    fn test_bootstrap_empty_store() {
        let (_, controller) = fresh();
        assert_eq!(controller.theme(), Theme::Light);
        assert!(controller.current_user().is_none());
        assert!(controller.favorites().is_empty());
        assert_eq!(controller.current_page(), Page::Home);
    }

    #[test]
    fn test_account_favorites_round_trip_through_sign_out() {
        let (store, mut controller) = fresh();

        let user = controller.register("a@x.com", "pw1").unwrap();
        assert_eq!(user.email.as_str(), "a@x.com");
        assert!(controller.favorites().is_empty());
        assert_eq!(
            store.get_item(keys::CURRENT_USER).unwrap().as_deref(),
            Some("a@x.com")
        );

        controller.toggle_favorite(id(101));
        assert_eq!(controller.favorites().ids(), &[id(101)]);

        controller.sign_out();
        assert!(controller.current_user().is_none());
        assert!(controller.favorites().is_empty());
        assert_eq!(store.get_item(keys::CURRENT_USER).unwrap(), None);
        assert_eq!(store.get_item(keys::ANON_FAVORITES).unwrap(), None);

        controller.sign_in("a@x.com", "pw1").unwrap();
        assert_eq!(controller.favorites().ids(), &[id(101)]);
    }

    #[test]
    fn test_anonymous_and_account_lists_stay_disjoint() {
        let (_, mut controller) = fresh();

        controller.toggle_favorite(id(5));
        controller.register("b@x.com", "pw").unwrap();
        assert!(controller.favorites().is_empty());

        controller.toggle_favorite(id(6));
        controller.sign_out();
        assert_eq!(controller.favorites().ids(), &[id(5)]);
    }

    #[test]
    fn test_failed_sign_in_leaves_session_unchanged() {
        let (_, mut controller) = fresh();
        controller.register("a@x.com", "pw1").unwrap();
        controller.toggle_favorite(id(1));

        let err = controller.sign_in("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(
            controller.current_user().map(|u| u.email.as_str()),
            Some("a@x.com")
        );
        assert_eq!(controller.favorites().ids(), &[id(1)]);
    }

    #[test]
    fn test_duplicate_registration_keeps_existing_record() {
        let (_, mut controller) = fresh();
        controller.register("a@x.com", "pw1").unwrap();
        controller.toggle_favorite(id(3));
        controller.sign_out();

        let err = controller.register("a@x.com", "other").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateAccount));
        assert!(controller.current_user().is_none());

        controller.sign_in("a@x.com", "pw1").unwrap();
        assert_eq!(controller.favorites().ids(), &[id(3)]);
    }

    #[test]
    fn test_missing_fields() {
        let (_, mut controller) = fresh();
        assert!(matches!(
            controller.register("   ", "pw"),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            controller.sign_in("a@x.com", ""),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_restore_session_on_bootstrap() {
        let store = Arc::new(MemoryStore::with_items([
            (keys::THEME, "dark"),
            (keys::USERS, r#"{"a@x.com":{"password":"pw1","favorites":[7,8]}}"#),
            (keys::CURRENT_USER, "a@x.com"),
            (keys::ANON_FAVORITES, "[1]"),
        ]));

        let controller = AppController::bootstrap(store);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(
            controller.current_user().map(CurrentUser::display_name),
            Some("a")
        );
        assert_eq!(controller.favorites().ids(), &[id(7), id(8)]);
    }

    #[test]
    fn test_stale_session_falls_back_to_anonymous() {
        let store = Arc::new(MemoryStore::with_items([
            (keys::USERS, "{}"),
            (keys::CURRENT_USER, "ghost@x.com"),
            (keys::ANON_FAVORITES, "[4,2]"),
        ]));

        let controller = AppController::bootstrap(store);
        assert!(controller.current_user().is_none());
        assert_eq!(controller.favorites().ids(), &[id(4), id(2)]);
    }

    #[test]
    fn test_corrupt_values_degrade_to_defaults() {
        let store = Arc::new(MemoryStore::with_items([
            (keys::USERS, "not json"),
            (keys::CURRENT_USER, "a@x.com"),
            (keys::ANON_FAVORITES, "{oops"),
        ]));

        let controller = AppController::bootstrap(store);
        assert!(controller.current_user().is_none());
        assert!(controller.favorites().is_empty());
    }

    #[test]
    fn test_toggle_flags_favorites_page_rerender() {
        let (store, mut controller) = fresh();

        let toggle = controller.toggle_favorite(id(9));
        assert!(toggle.is_favorite);
        assert_eq!(toggle.count, 1);
        assert!(!toggle.rerender_favorites);
        assert_eq!(
            store.get_item(keys::ANON_FAVORITES).unwrap().as_deref(),
            Some("[9]")
        );

        controller.navigate(Page::Favorites);
        let toggle = controller.toggle_favorite(id(9));
        assert!(!toggle.is_favorite);
        assert_eq!(toggle.count, 0);
        assert!(toggle.rerender_favorites);
        assert!(!controller.is_favorite(id(9)));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (store, mut controller) = fresh();
        assert_eq!(controller.toggle_theme(), Theme::Dark);
        assert_eq!(store.get_item(keys::THEME).unwrap().as_deref(), Some("dark"));
        assert_eq!(controller.toggle_theme(), Theme::Light);
    }
}
