//! HTTP client for the catalog API.

use std::sync::Arc;

use beauty_box_core::{Product, ProductId};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::{CatalogError, ProductQuery};
use crate::config::CatalogConfig;

/// Catalog API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client: builder.build()?,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// URL of the product listing for a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot be extended.
    pub fn products_url(&self, query: &ProductQuery) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&format!("{}/products.json", self.inner.base_url))?;
        let pairs = query.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// URL of a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot be extended.
    pub fn product_url(&self, id: ProductId) -> Result<Url, CatalogError> {
        Ok(Url::parse(&format!(
            "{}/products/{id}.json",
            self.inner.base_url
        ))?)
    }

    /// List products matching a query, unfiltered.
    ///
    /// A `null` body is treated as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that is not a JSON array of products.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(query)?;
        let products: Option<Vec<Product>> = self.get_json(url).await?;
        let products = products.unwrap_or_default();
        tracing::debug!(count = products.len(), "Catalog listing loaded");
        Ok(products)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = self.product_url(id)?;
        self.get_json(url).await
    }

    /// Fetch several products concurrently.
    ///
    /// Products that fail to load are dropped. The rest keep the order of
    /// `ids`.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_products(&self, ids: &[ProductId]) -> Vec<Product> {
        let results = join_all(ids.iter().map(|&id| self.get_product(id))).await;

        results
            .into_iter()
            .zip(ids)
            .filter_map(|(result, id)| match result {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::debug!(product_id = %id, error = %e, "Dropping product that failed to load");
                    None
                }
            })
            .collect()
    }

    /// GET a URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        tracing::debug!(url = %url, "Catalog request");

        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                url = %url,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::warn!(
                error = %e,
                url = %url,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client_for(server: &MockServer) -> CatalogClient {
        let base = Url::parse(&format!("{}/api/v1/", server.uri())).unwrap();
        CatalogClient::new(&CatalogConfig::with_base_url(base)).unwrap()
    }

    #[test]
    fn test_products_url() {
        let base = Url::parse("https://makeup-api.herokuapp.com/api/v1").unwrap();
        let client = CatalogClient::new(&CatalogConfig::with_base_url(base)).unwrap();

        assert_eq!(
            client.products_url(&ProductQuery::default()).unwrap().as_str(),
            "https://makeup-api.herokuapp.com/api/v1/products.json"
        );
        assert_eq!(
            client
                .products_url(&ProductQuery::for_brand("wet n wild").with_product_type("blush"))
                .unwrap()
                .as_str(),
            "https://makeup-api.herokuapp.com/api/v1/products.json?brand=wet+n+wild&product_type=blush"
        );
        assert_eq!(
            client.product_url(ProductId::new(1048)).unwrap().as_str(),
            "https://makeup-api.herokuapp.com/api/v1/products/1048.json"
        );
    }

    #[tokio::test]
    async fn test_list_products_sends_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .and(query_param("brand", "nyx"))
            .and(query_param("product_type", "lipstick"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Matte Lip", "image_link": "http://x/1.png", "price": "6.0"},
                {"id": 2, "name": "Gloss"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let products = client
            .list_products(&ProductQuery::for_brand("nyx").with_product_type("lipstick"))
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name.as_deref(), Some("Matte Lip"));
    }

    #[tokio::test]
    async fn test_list_products_null_body_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let products = client.list_products(&ProductQuery::default()).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .and(query_param("brand", "broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .and(query_param("brand", "garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        let err = client
            .list_products(&ProductQuery::for_brand("broken"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500, .. }));

        let err = client
            .list_products(&ProductQuery::for_brand("garbled"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_get_products_drops_failures_and_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products/7.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Seven"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products/8.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/products/9.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "name": "Nine"})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let ids = [9, 8, 7].map(ProductId::new);
        let products = client.get_products(&ids).await;

        let names: Vec<_> = products.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["Nine", "Seven"]);
    }

    #[tokio::test]
    async fn test_get_products_empty_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.get_products(&[]).await.is_empty());
    }
}
