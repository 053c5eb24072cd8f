//! Page chrome shared by every full page.
//!
//! The header, auth modal, and favorites badge are also returned on their
//! own as HTMX fragments, so each has its own template.

use askama::Template;
use askama_web::WebTemplate;
use beauty_box_core::Theme;

use crate::controller::AppController;
use crate::models::Page;

/// Theme toggle icon (`<i id="themeIcon">`).
#[derive(Template, WebTemplate, Clone, Copy)]
#[template(path = "partials/theme_icon.html")]
pub struct ThemeIconTemplate {
    pub theme: Theme,
}

/// Favorites count badge, hidden when zero.
///
/// With `oob` set it swaps itself into the header from any response.
#[derive(Template, WebTemplate, Clone, Copy)]
#[template(path = "partials/favorites_badge.html")]
pub struct FavoritesBadgeTemplate {
    pub count: usize,
    pub oob: bool,
}

impl FavoritesBadgeTemplate {
    #[must_use]
    pub const fn inline(count: usize) -> Self {
        Self { count, oob: false }
    }

    #[must_use]
    pub const fn out_of_band(count: usize) -> Self {
        Self { count, oob: true }
    }
}

/// Sign-in / register form inside the auth modal.
#[derive(Template, WebTemplate, Clone, Default)]
#[template(path = "partials/auth_form.html")]
pub struct AuthFormTemplate {
    /// Submitted email, kept after a failed attempt.
    pub email: String,
    pub register: bool,
    pub error: Option<String>,
}

impl AuthFormTemplate {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.register { "Register" } else { "Sign In" }
    }
}

/// Everything `base.html` needs.
#[derive(Clone)]
pub struct LayoutView {
    pub theme: Theme,
    pub theme_icon: ThemeIconTemplate,
    /// Local part of the signed-in email, or "Sign in".
    pub user_label: String,
    pub signed_in: bool,
    pub badge: FavoritesBadgeTemplate,
    pub auth_form: AuthFormTemplate,
    pub active: Page,
}

impl LayoutView {
    #[must_use]
    pub fn new(controller: &AppController) -> Self {
        let theme = controller.theme();
        let user = controller.current_user();

        Self {
            theme,
            theme_icon: ThemeIconTemplate { theme },
            user_label: user.map_or_else(
                || "Sign in".to_string(),
                |user| user.display_name().to_string(),
            ),
            signed_in: user.is_some(),
            badge: FavoritesBadgeTemplate::inline(controller.favorites().len()),
            auth_form: AuthFormTemplate::default(),
            active: controller.current_page(),
        }
    }

    /// Whether the nav link for `page` (`home`, `search`, `favorites`) is active.
    #[must_use]
    pub fn is_active(&self, page: &str) -> bool {
        self.active.as_str() == page
    }
}
