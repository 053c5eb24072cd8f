//! Product card and detail view models.

use beauty_box_core::{Price, Product, ProductId};

use crate::services::FavoritesList;

/// Image shown on a card when the product has none.
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200?text=No+Image";

/// Image shown in the detail view when the product has none.
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400?text=No+Image";

/// Swatches shown before the "+K more" overflow.
pub const MAX_SWATCHES: usize = 12;

const MAX_STARS: f64 = 5.0;

/// Format a catalog price as `$x.xx`, or "Price N/A".
#[must_use]
pub fn format_price(raw: Option<&str>) -> String {
    present(raw)
        .and_then(Price::parse)
        .map_or_else(|| "Price N/A".to_string(), |price| price.to_string())
}

/// `lip_liner` becomes `lip liner`; only the first underscore is replaced.
fn humanize_type(raw: &str) -> String {
    raw.replacen('_', " ", 1)
}

/// Treat empty strings like missing values.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

/// Heart toggle for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteButtonView {
    pub id: ProductId,
    pub active: bool,
}

impl FavoriteButtonView {
    #[must_use]
    pub const fn new(id: ProductId, active: bool) -> Self {
        Self { id, active }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        if self.active { "bi-heart-fill" } else { "bi-heart" }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.active {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }
}

/// A product in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: Option<ProductId>,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub product_type: String,
    pub image_url: String,
    /// Missing for products without an ID.
    pub favorite: Option<FavoriteButtonView>,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, favorites: &FavoritesList) -> Self {
        Self {
            id: product.id,
            name: or_fallback(product.name.as_deref(), "Unnamed Product"),
            brand: or_fallback(product.brand.as_deref(), "Unknown Brand"),
            price: format_price(product.price.as_deref()),
            product_type: present(product.product_type.as_deref())
                .map_or_else(|| "Product".to_string(), humanize_type),
            image_url: or_fallback(product.image_link.as_deref(), CARD_PLACEHOLDER_IMAGE),
            favorite: product
                .id
                .map(|id| FavoriteButtonView::new(id, favorites.contains(id))),
        }
    }

    #[must_use]
    pub const fn placeholder_image(&self) -> &'static str {
        CARD_PLACEHOLDER_IMAGE
    }
}

/// One colour swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    pub hex: String,
    pub title: String,
}

/// Star rating line, e.g. "⭐⭐⭐⭐ 4.2".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    pub stars: String,
    pub value: String,
}

impl RatingView {
    /// `None` when the rating is absent, zero, or not a number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(rating: Option<f64>) -> Option<Self> {
        let rating = rating.filter(|r| r.is_finite() && *r != 0.0)?;
        let count = rating.round().clamp(0.0, MAX_STARS) as usize;
        Some(Self {
            stars: "\u{2b50}".repeat(count),
            value: rating.to_string(),
        })
    }
}

/// Expanded product view shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    pub id: Option<ProductId>,
    pub title: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub image_url: String,
    pub product_type: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Total number of colours, including those past the overflow.
    pub color_count: usize,
    pub swatches: Vec<SwatchView>,
    /// Colours not shown as swatches.
    pub more_colors: Option<usize>,
    pub rating: Option<RatingView>,
    pub description: String,
    pub product_link: Option<String>,
    pub is_favorite: bool,
}

impl ProductDetailView {
    #[must_use]
    pub fn new(product: &Product, favorites: &FavoritesList) -> Self {
        let color_count = product.product_colors.len();
        let swatches = product
            .product_colors
            .iter()
            .take(MAX_SWATCHES)
            .map(|color| SwatchView {
                hex: color.hex_value.clone().unwrap_or_default(),
                title: or_fallback(color.colour_name.as_deref(), "Color"),
            })
            .collect();

        Self {
            id: product.id,
            title: or_fallback(product.name.as_deref(), "Product Details"),
            name: or_fallback(product.name.as_deref(), "Unnamed Product"),
            brand: or_fallback(product.brand.as_deref(), "Unknown Brand"),
            price: format_price(product.price.as_deref()),
            image_url: or_fallback(product.image_link.as_deref(), DETAIL_PLACEHOLDER_IMAGE),
            product_type: present(product.product_type.as_deref())
                .map_or_else(|| "N/A".to_string(), humanize_type),
            category: present(product.category.as_deref()).map(str::to_string),
            tags: product.tag_list.clone(),
            color_count,
            swatches,
            more_colors: color_count
                .checked_sub(MAX_SWATCHES)
                .filter(|&extra| extra > 0),
            rating: RatingView::new(product.rating),
            description: or_fallback(product.description.as_deref(), "No description available."),
            product_link: present(product.product_link.as_deref()).map(str::to_string),
            is_favorite: product.id.is_some_and(|id| favorites.contains(id)),
        }
    }

    #[must_use]
    pub const fn placeholder_image(&self) -> &'static str {
        DETAIL_PLACEHOLDER_IMAGE
    }

    #[must_use]
    pub const fn favorite_label(&self) -> &'static str {
        if self.is_favorite {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some("9.99")), "$9.99");
        assert_eq!(format_price(Some("12.3")), "$12.30");
        assert_eq!(format_price(Some("")), "Price N/A");
        assert_eq!(format_price(Some("call us")), "Price N/A");
        assert_eq!(format_price(None), "Price N/A");
    }

    #[test]
    fn test_card_fallbacks() {
        let card = ProductCardView::new(&product("{}"), &FavoritesList::default());

        assert_eq!(card.name, "Unnamed Product");
        assert_eq!(card.brand, "Unknown Brand");
        assert_eq!(card.price, "Price N/A");
        assert_eq!(card.product_type, "Product");
        assert_eq!(card.image_url, CARD_PLACEHOLDER_IMAGE);
        assert!(card.favorite.is_none());
    }

    #[test]
    fn test_card_values() {
        let favorites = FavoritesList::new(vec![ProductId::new(3)]);
        let card = ProductCardView::new(
            &product(
                r#"{"id": 3, "name": "Fit Me", "brand": "maybelline", "price": "7.5",
                    "product_type": "nail_polish_extra", "image_link": "http://x/3.png"}"#,
            ),
            &favorites,
        );

        assert_eq!(card.name, "Fit Me");
        assert_eq!(card.price, "$7.50");
        assert_eq!(card.product_type, "nail polish_extra");
        assert_eq!(card.favorite, Some(FavoriteButtonView::new(ProductId::new(3), true)));
        assert_eq!(card.favorite.unwrap().icon(), "bi-heart-fill");
    }

    #[test]
    fn test_detail_fallbacks() {
        let detail = ProductDetailView::new(&product(r#"{"id": 1}"#), &FavoritesList::default());

        assert_eq!(detail.title, "Product Details");
        assert_eq!(detail.name, "Unnamed Product");
        assert_eq!(detail.product_type, "N/A");
        assert_eq!(detail.image_url, DETAIL_PLACEHOLDER_IMAGE);
        assert_eq!(detail.description, "No description available.");
        assert!(detail.category.is_none());
        assert!(detail.tags.is_empty());
        assert!(detail.swatches.is_empty());
        assert!(detail.more_colors.is_none());
        assert!(detail.rating.is_none());
        assert!(detail.product_link.is_none());
        assert_eq!(detail.favorite_label(), "Add to Favorites");
    }

    #[test]
    fn test_detail_type_matches_card() {
        let p = product(r#"{"id": 4, "product_type": "lip_liner"}"#);
        let detail = ProductDetailView::new(&p, &FavoritesList::default());
        let card = ProductCardView::new(&p, &FavoritesList::default());

        assert_eq!(detail.product_type, "lip liner");
        assert_eq!(detail.product_type, card.product_type);

        let blank = product(r#"{"id": 5, "product_type": ""}"#);
        let detail = ProductDetailView::new(&blank, &FavoritesList::default());
        assert_eq!(detail.product_type, "N/A");
    }

    #[test]
    fn test_detail_swatch_overflow() {
        let colors: Vec<String> = (0..15)
            .map(|i| format!(r##"{{"hex_value": "#00000{}", "colour_name": "Shade {i}"}}"##, i % 10))
            .collect();
        let json = format!(r#"{{"id": 2, "product_colors": [{}, {{}}]}}"#, colors.join(","));

        let detail = ProductDetailView::new(&product(&json), &FavoritesList::default());
        assert_eq!(detail.color_count, 16);
        assert_eq!(detail.swatches.len(), MAX_SWATCHES);
        assert_eq!(detail.more_colors, Some(4));
        assert_eq!(detail.swatches[0].title, "Shade 0");

        let few = ProductDetailView::new(
            &product(r##"{"product_colors": [{"hex_value": "#fff"}]}"##),
            &FavoritesList::default(),
        );
        assert_eq!(few.swatches[0].title, "Color");
        assert!(few.more_colors.is_none());
    }

    #[test]
    fn test_rating() {
        assert!(RatingView::new(None).is_none());
        assert!(RatingView::new(Some(0.0)).is_none());

        let rating = RatingView::new(Some(4.5)).unwrap();
        assert_eq!(rating.stars.chars().count(), 5);
        assert_eq!(rating.value, "4.5");

        let rating = RatingView::new(Some(3.2)).unwrap();
        assert_eq!(rating.stars.chars().count(), 3);
        assert_eq!(rating.value, "3.2");

        let rating = RatingView::new(Some(5.0)).unwrap();
        assert_eq!(rating.value, "5");
    }
}
