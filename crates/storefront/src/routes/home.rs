//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::layout::LayoutView;
use crate::catalog::ProductQuery;
use crate::filters;
use crate::models::Page;
use crate::state::AppState;
use crate::views::ListingView;

#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub listing: ListingView,
}

/// Featured products from the configured brand.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    state.controller().await.navigate(Page::Home);

    let query = ProductQuery::for_brand(&state.config().catalog.featured_brand);
    let products = state
        .catalog()
        .list_products(&query)
        .await
        .map_err(|e| tracing::error!("Failed to fetch featured products: {e}"))
        .ok();

    let controller = state.controller().await;
    HomeTemplate {
        layout: LayoutView::new(&controller),
        listing: ListingView::featured(products, controller.favorites()),
    }
}
