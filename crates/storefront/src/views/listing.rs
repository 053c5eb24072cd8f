//! Product grids for the home, search, and favorites pages.

use beauty_box_core::Product;

use super::product::ProductCardView;
use crate::catalog;
use crate::services::FavoritesList;

/// Shown when the featured listing is empty.
pub const NO_PRODUCTS: &str = "No products found.";

/// Shown when a search has no listable results.
pub const NO_MATCHES: &str = "No products found matching your criteria. Try different filters.";

/// Shown when a listing request fails.
pub const LOAD_FAILED: &str = "Failed to load products. Please try again later.";

/// Shown in the modal when a product cannot be loaded.
pub const DETAIL_FAILED: &str = "Failed to load product details. Please try again.";

/// A grid of product cards, or the message replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingView {
    pub cards: Vec<ProductCardView>,
    /// Error or empty-result banner.
    pub alert: Option<&'static str>,
    /// "N products found" line; search only.
    pub result_count: Option<usize>,
    /// Show the "No favorites yet" empty state; favorites only.
    pub empty_favorites: bool,
}

impl ListingView {
    /// Home page grid: listable products, capped.
    ///
    /// `None` means the request failed.
    #[must_use]
    pub fn featured(products: Option<Vec<Product>>, favorites: &FavoritesList) -> Self {
        let Some(products) = products else {
            return Self::failed();
        };

        let shown = catalog::featured(products);
        if shown.is_empty() {
            return Self::alert(NO_PRODUCTS);
        }
        Self::with_cards(&shown, favorites)
    }

    /// Search results grid: every listable product, with a count.
    ///
    /// `None` means the request failed.
    #[must_use]
    pub fn search(products: Option<Vec<Product>>, favorites: &FavoritesList) -> Self {
        let Some(products) = products else {
            return Self::failed();
        };

        let shown = catalog::listable(products);
        if shown.is_empty() {
            return Self::alert(NO_MATCHES);
        }
        Self {
            result_count: Some(shown.len()),
            ..Self::with_cards(&shown, favorites)
        }
    }

    /// Favorites grid: whatever loaded, unfiltered, in favorites order.
    #[must_use]
    pub fn favorites(products: &[Product], favorites: &FavoritesList) -> Self {
        if products.is_empty() {
            return Self {
                empty_favorites: true,
                ..Self::default()
            };
        }
        Self::with_cards(products, favorites)
    }

    #[must_use]
    pub fn failed() -> Self {
        Self::alert(LOAD_FAILED)
    }

    fn alert(message: &'static str) -> Self {
        Self {
            alert: Some(message),
            ..Self::default()
        }
    }

    fn with_cards(products: &[Product], favorites: &FavoritesList) -> Self {
        Self {
            cards: products
                .iter()
                .map(|product| ProductCardView::new(product, favorites))
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_box_core::ProductId;

    use super::*;

    fn products(json: &str) -> Vec<Product> {
        serde_json::from_str(json).unwrap()
    }

    fn ids(view: &ListingView) -> Vec<i64> {
        view.cards
            .iter()
            .filter_map(|card| card.id.map(|id| id.as_i64()))
            .collect()
    }

    const MIXED: &str = r#"[
        {"id": 1, "image_link": "", "price": "9.99"},
        {"id": 2, "image_link": "http://x/2.png", "price": "0.0"},
        {"id": 3, "image_link": "http://x/3.png", "price": "5.00"}
    ]"#;

    #[test]
    fn test_featured_renders_only_listable() {
        let view = ListingView::featured(Some(products(MIXED)), &FavoritesList::default());
        assert_eq!(ids(&view), vec![3]);
        assert!(view.alert.is_none());
        assert!(view.result_count.is_none());
    }

    #[test]
    fn test_featured_empty_and_failed() {
        let empty = ListingView::featured(Some(Vec::new()), &FavoritesList::default());
        assert_eq!(empty.alert, Some(NO_PRODUCTS));

        let unlistable = ListingView::featured(
            Some(products(r#"[{"id": 1, "price": "2.0"}]"#)),
            &FavoritesList::default(),
        );
        assert_eq!(unlistable.alert, Some(NO_PRODUCTS));

        let failed = ListingView::featured(None, &FavoritesList::default());
        assert_eq!(failed.alert, Some(LOAD_FAILED));
        assert!(failed.cards.is_empty());
    }

    #[test]
    fn test_search_counts_results() {
        let view = ListingView::search(Some(products(MIXED)), &FavoritesList::default());
        assert_eq!(ids(&view), vec![3]);
        assert_eq!(view.result_count, Some(1));

        let none = ListingView::search(Some(Vec::new()), &FavoritesList::default());
        assert_eq!(none.alert, Some(NO_MATCHES));
        assert!(none.result_count.is_none());

        let failed = ListingView::search(None, &FavoritesList::default());
        assert_eq!(failed.alert, Some(LOAD_FAILED));
    }

    #[test]
    fn test_favorites_keeps_unlistable_products() {
        let favorites = FavoritesList::new(vec![ProductId::new(8)]);
        let loaded = products(r#"[{"id": 8, "name": "No image"}]"#);

        let view = ListingView::favorites(&loaded, &favorites);
        assert_eq!(ids(&view), vec![8]);
        assert!(!view.empty_favorites);
        assert!(view.alert.is_none());
        assert!(view.cards[0].favorite.is_some_and(|button| button.active));
    }

    #[test]
    fn test_favorites_empty_state() {
        let view = ListingView::favorites(&[], &FavoritesList::default());
        assert!(view.empty_favorites);
        assert!(view.cards.is_empty());
        assert!(view.alert.is_none());
    }
}
