//! `catalog` commands.
//!
//! Listings apply the same listability rules as the storefront pages, so the
//! output matches what a visitor would see.

use std::io::Write;

use beauty_box_core::{Product, ProductId};
use beauty_box_storefront::catalog::{self, Brand, CatalogClient, ProductQuery, ProductType};
use beauty_box_storefront::services::FavoritesList;
use beauty_box_storefront::views::{ProductCardView, ProductDetailView};

use super::CommandError;

/// Print the featured products for `brand`.
///
/// # Errors
///
/// Returns `CommandError` if the catalog request fails.
pub async fn featured(
    client: &CatalogClient,
    brand: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let products = client.list_products(&ProductQuery::for_brand(brand)).await?;
    write_cards(&catalog::featured(products), out)
}

/// Print listable products matching the filters.
///
/// Unlike the search form, unknown filter values are rejected instead of
/// widening the search.
///
/// # Errors
///
/// Returns `CommandError` if a filter is unknown or the catalog request fails.
pub async fn search(
    client: &CatalogClient,
    brand: Option<&str>,
    product_type: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let query = build_query(brand, product_type)?;
    let products = catalog::listable(client.list_products(&query).await?);
    write_cards(&products, out)?;
    writeln!(out, "Found {} product(s)", products.len())?;
    Ok(())
}

/// Print one product in detail.
///
/// # Errors
///
/// Returns `CommandError` if the catalog request fails.
pub async fn show(
    client: &CatalogClient,
    id: ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let product = client.get_product(id).await?;
    let detail = ProductDetailView::new(&product, &FavoritesList::default());

    writeln!(out, "{}", detail.title)?;
    writeln!(out, "  Brand:    {}", detail.brand)?;
    writeln!(out, "  Price:    {}", detail.price)?;
    writeln!(out, "  Type:     {}", detail.product_type)?;
    if let Some(category) = &detail.category {
        writeln!(out, "  Category: {category}")?;
    }
    if !detail.tags.is_empty() {
        writeln!(out, "  Tags:     {}", detail.tags.join(", "))?;
    }
    if detail.color_count > 0 {
        writeln!(out, "  Colors:   {}", detail.color_count)?;
    }
    if let Some(rating) = &detail.rating {
        writeln!(out, "  Rating:   {}", rating.value)?;
    }
    if let Some(link) = &detail.product_link {
        writeln!(out, "  Link:     {link}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", detail.description)?;
    Ok(())
}

fn build_query(brand: Option<&str>, product_type: Option<&str>) -> Result<ProductQuery, CommandError> {
    let mut query = ProductQuery::default();

    if let Some(value) = brand {
        let brand = Brand::from_value(value).ok_or_else(|| CommandError::UnknownFilter {
            kind: "brand",
            value: value.to_string(),
            expected: Brand::ALL.map(Brand::value).join(", "),
        })?;
        query = query.with_brand(brand.value());
    }

    if let Some(value) = product_type {
        let kind = ProductType::from_value(value).ok_or_else(|| CommandError::UnknownFilter {
            kind: "product type",
            value: value.to_string(),
            expected: ProductType::ALL.map(ProductType::value).join(", "),
        })?;
        query = query.with_product_type(kind.value());
    }

    Ok(query)
}

fn write_cards(products: &[Product], out: &mut impl Write) -> Result<(), CommandError> {
    let favorites = FavoritesList::default();
    for product in products {
        let card = ProductCardView::new(product, &favorites);
        let id = card.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        writeln!(out, "{id}\t{}\t{}\t{}", card.brand, card.name, card.price)?;
    }
    Ok(())
}
