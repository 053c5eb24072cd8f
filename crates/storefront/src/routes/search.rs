//! Search page route handlers.
//!
//! The page itself only renders the filters. Results are fetched when the
//! form is submitted, either as an HTMX fragment or, without JavaScript, by
//! reloading the page with the filters in the query string.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use super::layout::LayoutView;
use crate::catalog::{Brand, ProductQuery, ProductType};
use crate::filters;
use crate::models::Page;
use crate::state::AppState;
use crate::views::{FilterOption, ListingView, search};

/// Filter values as submitted; unknown values mean "all".
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub brand: Option<String>,
    pub product_type: Option<String>,
}

impl SearchParams {
    /// Whether the search form was submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.brand.is_some() || self.product_type.is_some()
    }

    #[must_use]
    pub fn brand(&self) -> Option<Brand> {
        self.brand.as_deref().and_then(Brand::from_value)
    }

    #[must_use]
    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type.as_deref().and_then(ProductType::from_value)
    }

    #[must_use]
    pub fn query(&self) -> ProductQuery {
        let mut query = ProductQuery::default();
        if let Some(brand) = self.brand() {
            query = query.with_brand(brand.value());
        }
        if let Some(kind) = self.product_type() {
            query = query.with_product_type(kind.value());
        }
        query
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchTemplate {
    pub layout: LayoutView,
    pub brands: Vec<FilterOption>,
    pub product_types: Vec<FilterOption>,
    pub listing: Option<ListingView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    pub listing: ListingView,
}

/// Search page.
#[instrument(skip(state))]
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    state.controller().await.navigate(Page::Search);

    let listing = if params.is_submitted() {
        Some(run_search(&state, &params).await)
    } else {
        None
    };

    let layout = LayoutView::new(&*state.controller().await);
    SearchTemplate {
        layout,
        brands: search::brand_options(params.brand()),
        product_types: search::product_type_options(params.product_type()),
        listing,
    }
}

/// Search results fragment (HTMX).
#[instrument(skip(state))]
pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    SearchResultsTemplate {
        listing: run_search(&state, &params).await,
    }
}

async fn run_search(state: &AppState, params: &SearchParams) -> ListingView {
    let products = state
        .catalog()
        .list_products(&params.query())
        .await
        .map_err(|e| tracing::error!("Failed to search products: {e}"))
        .ok();

    let controller = state.controller().await;
    ListingView::search(products, controller.favorites())
}
