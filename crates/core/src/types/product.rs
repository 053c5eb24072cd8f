//! Product records from the external cosmetics catalog.
//!
//! The catalog is not owned by this application and its response shape is
//! assumed rather than validated. Every field is optional, and fields of an
//! unexpected JSON type are treated as absent instead of failing the whole
//! record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::ProductId;
use super::price::Price;

/// A product as returned by `products.json` and `products/{id}.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    /// Raw decimal string; numbers are converted to their string form.
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tag_list: Vec<String>,
    #[serde(default, deserialize_with = "lenient_colors")]
    pub product_colors: Vec<ProductColor>,
}

/// One shade of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hex_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub colour_name: Option<String>,
}

impl Product {
    /// Whether the record has a non-blank image link.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty())
    }

    /// The parsed price, if the record has a numeric one.
    #[must_use]
    pub fn parsed_price(&self) -> Option<Price> {
        self.price.as_deref().and_then(Price::parse)
    }

    /// Whether the record has a strictly positive price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.parsed_price().is_some_and(|price| price.is_positive())
    }

    /// Whether the record is worth showing in a listing.
    ///
    /// Listings hide products without an image or without a positive price.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        self.has_image() && self.has_price()
    }
}

// =============================================================================
// Lenient field deserializers
// =============================================================================

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().map(ProductId::new),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_colors<'de, D>(deserializer: D) -> Result<Vec<ProductColor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
