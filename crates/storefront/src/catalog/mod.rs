//! Read-only client for the public Makeup API.
//!
//! # Architecture
//!
//! - The catalog is the source of truth; nothing is cached or synced locally
//! - Every listing is filtered client-side: products without an image or
//!   without a positive price are hidden
//! - Favorites are resolved one product at a time, concurrently, and
//!   products that fail to load are silently dropped
//!
//! # Endpoints
//!
//! - `GET {base}/products.json[?brand=..&product_type=..]`
//! - `GET {base}/products/{id}.json`
//!
//! # Example
//!
//! ```rust,ignore
//! use beauty_box_storefront::catalog::{CatalogClient, ProductQuery};
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let lipsticks = client
//!     .list_products(&ProductQuery::default().with_product_type("lipstick"))
//!     .await?;
//! ```

mod client;
mod query;

pub use client::CatalogClient;
pub use query::{Brand, ProductQuery, ProductType};

use beauty_box_core::Product;
use thiserror::Error;

/// Maximum number of products shown on the home page.
pub const FEATURED_LIMIT: usize = 12;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Keep only products worth listing, in their original order.
#[must_use]
pub fn listable(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(Product::is_listable).collect()
}

/// Listable products for the home page, capped at [`FEATURED_LIMIT`].
#[must_use]
pub fn featured(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(Product::is_listable)
        .take(FEATURED_LIMIT)
        .collect()
}
