//! Product detail route handlers.
//!
//! The detail view lives in a modal; both handlers return its body.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use beauty_box_core::ProductId;
use tracing::instrument;

use super::favorites::{parse_product_id, toggle_trigger};
use super::layout::FavoritesBadgeTemplate;
use crate::error::Result;
use crate::state::AppState;
use crate::views::ProductDetailView;
use crate::views::listing::DETAIL_FAILED;

#[derive(Template, WebTemplate)]
#[template(path = "partials/product_detail.html")]
pub struct ProductDetailTemplate {
    pub detail: Option<ProductDetailView>,
    pub error: Option<&'static str>,
    /// Out-of-band badge update after a toggle.
    pub badge: Option<FavoritesBadgeTemplate>,
}

/// Product detail fragment (HTMX).
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_product_id(&id)?;
    Ok(load_detail(&state, id, None).await.into_response())
}

/// Toggle a favorite from the detail view and redraw it (HTMX).
#[instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_product_id(&id)?;
    let toggle = state.controller().await.toggle_favorite(id);

    let template = load_detail(
        &state,
        id,
        Some(FavoritesBadgeTemplate::out_of_band(toggle.count)),
    )
    .await;

    Ok((
        AppendHeaders([("HX-Trigger", toggle_trigger(&toggle))]),
        template,
    )
        .into_response())
}

async fn load_detail(
    state: &AppState,
    id: ProductId,
    badge: Option<FavoritesBadgeTemplate>,
) -> ProductDetailTemplate {
    match state.catalog().get_product(id).await {
        Ok(product) => {
            let controller = state.controller().await;
            ProductDetailTemplate {
                detail: Some(ProductDetailView::new(&product, controller.favorites())),
                error: None,
                badge,
            }
        }
        Err(e) => {
            tracing::error!(product_id = %id, "Failed to fetch product: {e}");
            ProductDetailTemplate {
                detail: None,
                error: Some(DETAIL_FAILED),
                badge,
            }
        }
    }
}
