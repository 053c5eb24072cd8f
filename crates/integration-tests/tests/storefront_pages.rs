//! Page and fragment rendering against a mocked catalog.

use axum::http::StatusCode;

use beauty_box_integration_tests::{TestContext, product_json};

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/no/such/page").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_shows_only_listable_featured_products() {
    let ctx = TestContext::new().await;
    let body = format!(
        "[{}, {}, {}]",
        product_json(1, "Great Lash", "maybelline", "7.49"),
        r#"{"id": 2, "name": "No Image Gloss", "brand": "maybelline", "price": "4.0", "image_link": ""}"#,
        r#"{"id": 3, "name": "Free Sample", "brand": "maybelline", "price": "0.0", "image_link": "https://img.example.com/3.png"}"#,
    );
    ctx.mount_brand("maybelline", &body).await;

    let resp = ctx.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Great Lash"));
    assert!(resp.body.contains("$7.49"));
    assert!(resp.body.contains("lip liner"));
    assert!(!resp.body.contains("No Image Gloss"));
    assert!(!resp.body.contains("Free Sample"));
    assert!(resp.body.contains(r#"data-theme="light""#));
}

#[tokio::test]
async fn test_home_catalog_failure_shows_alert() {
    // No mock mounted: wiremock answers 404.
    let ctx = TestContext::new().await;
    let resp = ctx.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Failed to load products. Please try again later."));
}

#[tokio::test]
async fn test_home_empty_featured_list() {
    let ctx = TestContext::new().await;
    ctx.mount_brand("maybelline", "[]").await;

    let resp = ctx.get("/").await;

    assert!(resp.body.contains("No products found."));
}

#[tokio::test]
async fn test_search_results_fragment_counts_listable_products() {
    let ctx = TestContext::new().await;
    let body = format!(
        "[{}, {}]",
        product_json(10, "Soft Matte", "nyx", "6.50"),
        r#"{"id": 11, "name": "Broken", "brand": "nyx"}"#,
    );
    ctx.mount_brand("nyx", &body).await;

    let resp = ctx.htmx_get("/search/results?brand=nyx&product_type=").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(r#"<span id="resultCount">1</span>"#));
    assert!(resp.body.contains("Soft Matte"));
    assert!(!resp.body.contains("Broken"));
}

#[tokio::test]
async fn test_search_no_matches() {
    let ctx = TestContext::new().await;
    ctx.mount_brand("milani", "[]").await;

    let resp = ctx.htmx_get("/search/results?brand=milani").await;

    assert!(!resp.body.contains("resultCount"));
    assert!(
        resp.body
            .contains("No products found matching your criteria. Try different filters.")
    );
}

#[tokio::test]
async fn test_search_page_without_filters_runs_no_query() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/search").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("All Brands"));
    assert!(!resp.body.contains("resultCount"));
}

#[tokio::test]
async fn test_product_detail_fragment() {
    let ctx = TestContext::new().await;
    ctx.mount_product(
        1048,
        r##"{"id": 1048, "name": "Lippie Pencil", "brand": "colourpop", "price": "5.0",
            "rating": 4.4, "tag_list": ["Vegan"],
            "product_colors": [{"hex_value": "#B28378", "colour_name": "BFF"}]}"##,
    )
    .await;

    let resp = ctx.htmx_get("/products/1048").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Lippie Pencil"));
    assert!(resp.body.contains("(1)"));
    assert!(resp.body.contains("(4.4)"));
    assert!(resp.body.contains("Add to Favorites"));
}

#[tokio::test]
async fn test_product_detail_failure() {
    let ctx = TestContext::new().await;
    ctx.fail_product(5, 500).await;

    let resp = ctx.htmx_get("/products/5").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Failed to load product details. Please try again."));
}

#[tokio::test]
async fn test_product_detail_rejects_bad_id() {
    let ctx = TestContext::new().await;
    let resp = ctx.htmx_get("/products/lipstick").await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
