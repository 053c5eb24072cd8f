//! View models between catalog data and templates.
//!
//! Everything a template prints is resolved here: listability filtering,
//! fallback strings, price formatting, and favorite state. Templates only
//! lay the values out.

pub mod listing;
pub mod product;
pub mod search;

pub use listing::ListingView;
pub use product::{FavoriteButtonView, ProductCardView, ProductDetailView, RatingView, SwatchView};
pub use search::FilterOption;
