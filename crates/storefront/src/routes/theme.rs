//! Theme toggle route handler.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use super::is_htmx;
use super::layout::ThemeIconTemplate;
use crate::state::AppState;

/// Flip the theme (HTMX).
///
/// Returns the new icon; `themeChanged` carries the value for `data-theme`.
/// Plain form posts are redirected back to the current page.
#[instrument(skip(state, headers))]
pub async fn toggle(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (theme, page) = {
        let mut controller = state.controller().await;
        (controller.toggle_theme(), controller.current_page())
    };
    tracing::debug!(theme = %theme, "Theme toggled");

    if !is_htmx(&headers) {
        return Redirect::to(page.path()).into_response();
    }

    let trigger = serde_json::json!({ "themeChanged": theme.as_str() }).to_string();
    (
        AppendHeaders([("HX-Trigger", trigger)]),
        ThemeIconTemplate { theme },
    )
        .into_response()
}
