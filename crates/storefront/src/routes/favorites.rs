//! Favorites route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use beauty_box_core::ProductId;
use tracing::instrument;

use super::layout::{FavoritesBadgeTemplate, LayoutView};
use crate::controller::FavoriteToggle;
use crate::error::{AppError, Result, record_breadcrumb};
use crate::filters;
use crate::models::Page;
use crate::state::AppState;
use crate::views::{FavoriteButtonView, ListingView};

#[derive(Template, WebTemplate)]
#[template(path = "pages/favorites.html")]
pub struct FavoritesTemplate {
    pub layout: LayoutView,
    pub listing: ListingView,
}

#[derive(Template, WebTemplate)]
#[template(path = "partials/favorites_grid.html")]
pub struct FavoritesGridTemplate {
    pub listing: ListingView,
}

/// Card heart button plus the out-of-band badge.
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_toggle.html")]
pub struct FavoriteToggleTemplate {
    pub button: FavoriteButtonView,
    pub badge: FavoritesBadgeTemplate,
}

/// Favorites page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> impl IntoResponse {
    state.controller().await.navigate(Page::Favorites);
    let listing = load_listing(&state).await;

    FavoritesTemplate {
        layout: LayoutView::new(&*state.controller().await),
        listing,
    }
}

/// Favorites grid fragment (HTMX), re-requested whenever the list changes.
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    FavoritesGridTemplate {
        listing: load_listing(&state).await,
    }
}

/// Toggle a favorite from a product card (HTMX).
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_product_id(&id)?;
    let toggle = state.controller().await.toggle_favorite(id);

    Ok((
        AppendHeaders([("HX-Trigger", toggle_trigger(&toggle))]),
        FavoriteToggleTemplate {
            button: FavoriteButtonView::new(toggle.id, toggle.is_favorite),
            badge: FavoritesBadgeTemplate::out_of_band(toggle.count),
        },
    )
        .into_response())
}

/// Fetch every favorite concurrently, keeping those that load.
async fn load_listing(state: &AppState) -> ListingView {
    let ids = state.controller().await.favorites().ids().to_vec();
    let products = if ids.is_empty() {
        Vec::new()
    } else {
        state.catalog().get_products(&ids).await
    };

    let controller = state.controller().await;
    ListingView::favorites(&products, controller.favorites())
}

/// Parse a product ID path segment.
pub(super) fn parse_product_id(raw: &str) -> Result<ProductId> {
    raw.parse()
        .map_err(|e: beauty_box_core::ProductIdError| AppError::BadRequest(e.to_string()))
}

/// `HX-Trigger` value announcing a toggle.
///
/// `favoriteToggled` lets every heart for the product update;
/// `favoritesChanged` reloads the favorites grid when it is on screen.
pub(super) fn toggle_trigger(toggle: &FavoriteToggle) -> String {
    let product_id = toggle.id.to_string();
    record_breadcrumb(
        "favorites",
        if toggle.is_favorite {
            "Added favorite"
        } else {
            "Removed favorite"
        },
        &[("product_id", product_id.as_str())],
    );

    let mut events = serde_json::Map::new();
    events.insert(
        "favoriteToggled".to_string(),
        serde_json::json!({ "id": toggle.id, "active": toggle.is_favorite }),
    );
    if toggle.rerender_favorites {
        events.insert("favoritesChanged".to_string(), serde_json::Value::Bool(true));
    }
    serde_json::Value::Object(events).to_string()
}
