//! Local sign-in, registration, and sign-out.
//!
//! **Insecure demo logic**: see [`crate::services::auth`].

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use super::layout::AuthFormTemplate;
use super::reload;
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Auth modal form data.
#[derive(Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Present when the "register" checkbox is ticked.
    #[serde(default)]
    pub register: Option<String>,
}

impl AuthForm {
    #[must_use]
    pub const fn is_register(&self) -> bool {
        self.register.is_some()
    }
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("register", &self.is_register())
            .finish()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Sign in or register.
///
/// On success the page reloads with the new session. A mistake the user can
/// fix re-renders the form with the message and the email kept.
#[instrument(skip(state, headers))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AuthForm>,
) -> Result<Response> {
    let register = form.is_register();

    let (result, page) = {
        let mut controller = state.controller().await;
        let result = if register {
            controller.register(&form.email, &form.password)
        } else {
            controller.sign_in(&form.email, &form.password)
        };
        let result = result.map(|user| user.email.clone());
        (result, controller.current_page())
    };

    match result {
        Ok(email) => {
            set_sentry_user(&email);
            Ok(reload(&headers, page))
        }
        Err(e) if e.is_user_error() => {
            tracing::debug!(register, "Auth form rejected: {e}");
            Ok(AuthFormTemplate {
                email: form.email,
                register,
                error: Some(e.to_string()),
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Sign out and fall back to the anonymous favorites.
#[instrument(skip(state, headers))]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let page = {
        let mut controller = state.controller().await;
        controller.sign_out();
        controller.current_page()
    };
    clear_sentry_user();

    reload(&headers, page)
}
