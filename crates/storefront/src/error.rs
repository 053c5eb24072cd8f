//! Unified error handling with Sentry integration.
//!
//! Catalog failures and auth mistakes are rendered inline by the handlers
//! that hit them; `AppError` covers what is left. Server errors are captured
//! to Sentry before responding to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use beauty_box_core::Email;

use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed for a reason the form cannot show.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the failure is ours rather than the client's.
    const fn is_server_error(&self) -> bool {
        match self {
            Self::Auth(err) => !err.is_user_error(),
            Self::NotFound(_) | Self::BadRequest(_) => false,
        }
    }

    /// HTTP status for the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::DuplicateAccount) => StatusCode::CONFLICT,
            Self::Auth(AuthError::MissingFields) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(AuthError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text for the client. Server-side details stay in the logs.
    #[must_use]
    pub fn client_message(&self) -> String {
        if self.is_server_error() {
            return "Something went wrong. Please try again.".to_string();
        }
        match self {
            Self::Auth(err) => err.to_string(),
            Self::NotFound(path) => format!("Nothing at {path}"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request failed"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (self.status(), self.client_message()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Attach the signed-in account to subsequent Sentry events.
pub fn set_sentry_user(email: &Email) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            username: Some(email.local_part().to_string()),
            ..Default::default()
        }));
    });
}

/// Stop attributing Sentry events to an account (sign-out).
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| scope.set_user(None));
}

/// Record a user action as a Sentry breadcrumb.
///
/// ```rust,ignore
/// record_breadcrumb("favorites", "Added favorite", &[("product_id", "1048")]);
/// ```
pub fn record_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data: data
            .iter()
            .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
            .collect(),
        ..Default::default()
    });
}
