//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (featured products)
//! GET  /health                    - Health check
//!
//! # Search
//! GET  /search                    - Search page (filters; results when submitted)
//! GET  /search/results            - Results grid fragment (HTMX)
//!
//! # Favorites
//! GET  /favorites                 - Favorites page
//! GET  /favorites/grid            - Favorites grid fragment (HTMX)
//! POST /favorites/{id}/toggle     - Toggle from a card (returns button + badge)
//!
//! # Products (modal fragments)
//! GET  /products/{id}             - Product detail
//! POST /products/{id}/favorite    - Toggle from the detail view (returns detail)
//!
//! # Auth
//! POST /auth                      - Sign in or register
//! POST /auth/logout               - Sign out
//!
//! # Theme
//! POST /theme/toggle              - Flip light/dark (returns icon)
//! ```

pub mod auth;
pub mod favorites;
pub mod home;
pub mod layout;
pub mod products;
pub mod search;
pub mod theme;

use axum::{
    Router,
    http::{HeaderMap, StatusCode, Uri},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::{get, post},
};

use crate::error::AppError;
use crate::models::Page;
use crate::state::AppState;

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::page))
        .route("/results", get(search::results))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::page))
        .route("/grid", get(favorites::grid))
        .route("/{id}/toggle", post(favorites::toggle))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/favorite", post(products::toggle_favorite))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(auth::submit))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .nest("/search", search_routes())
        .nest("/favorites", favorites_routes())
        .nest("/products", product_routes())
        .nest("/auth", auth_routes())
        .route("/theme/toggle", post(theme::toggle))
        .fallback(not_found)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Whether the request was made by HTMX.
pub(crate) fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("HX-Request")
}

/// Reload the current page after a session change.
///
/// HTMX gets `HX-Refresh`; plain form posts are redirected to `page`.
pub(crate) fn reload(headers: &HeaderMap, page: Page) -> Response {
    if is_htmx(headers) {
        (StatusCode::OK, AppendHeaders([("HX-Refresh", "true")])).into_response()
    } else {
        Redirect::to(page.path()).into_response()
    }
}
