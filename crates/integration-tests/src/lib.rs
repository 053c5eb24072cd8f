//! Integration tests for Beauty Box.
//!
//! Every test drives the full storefront router in process with
//! `tower::ServiceExt::oneshot`, backed by a [`MemoryStore`] and a wiremock
//! server standing in for the catalog API. No network access or running
//! server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p beauty-box-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use beauty_box_storefront::config::StorefrontConfig;
use beauty_box_storefront::state::AppState;
use beauty_box_storefront::store::{KeyValueStore, MemoryStore, SharedStore};

/// A response with its body collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// A header value as a string, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `HX-Trigger` header parsed as JSON.
    #[must_use]
    pub fn trigger(&self) -> serde_json::Value {
        let raw = self.header("HX-Trigger").expect("missing HX-Trigger header");
        serde_json::from_str(raw).expect("HX-Trigger is not JSON")
    }
}

/// A storefront wired to a mock catalog and an in-memory store.
pub struct TestContext {
    pub catalog: MockServer,
    pub store: Arc<MemoryStore>,
    app: Router,
}

impl TestContext {
    /// Start with an empty store.
    pub async fn new() -> Self {
        Self::with_store(MemoryStore::new()).await
    }

    /// Start with pre-seeded store values; the app bootstraps from them.
    pub async fn with_store(store: MemoryStore) -> Self {
        let catalog = MockServer::start().await;
        let base = format!("{}/api/v1", catalog.uri());
        let config = StorefrontConfig::from_lookup(|key| match key {
            "CATALOG_API_BASE" => Some(base.clone()),
            _ => None,
        })
        .expect("test configuration is valid");

        let store = Arc::new(store);
        let shared: SharedStore = store.clone();
        let state = AppState::new(config, shared).expect("catalog client builds");

        Self {
            catalog,
            store,
            app: beauty_box_storefront::app(state),
        }
    }

    /// Read a raw store value.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get_item(key).expect("memory store read")
    }

    /// Serve `body` for `products.json?brand={brand}`.
    pub async fn mount_brand(&self, brand: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path("/api/v1/products.json"))
            .and(query_param("brand", brand))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.catalog)
            .await;
    }

    /// Serve `body` for `products/{id}.json`.
    pub async fn mount_product(&self, id: i64, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/products/{id}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.catalog)
            .await;
    }

    /// Fail `products/{id}.json` with `status`.
    pub async fn fail_product(&self, id: i64, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/products/{id}.json")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.catalog)
            .await;
    }

    /// Plain browser GET.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, false).await
    }

    /// HTMX GET.
    pub async fn htmx_get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, true).await
    }

    /// HTMX POST with an optional url-encoded form body.
    pub async fn htmx_post(&self, uri: &str, form: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, form, true).await
    }

    /// Plain form POST (no JavaScript).
    pub async fn post(&self, uri: &str, form: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, form, false).await
    }

    async fn send(&self, method: Method, uri: &str, form: Option<&str>, htmx: bool) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        let body = match form {
            Some(form) => {
                builder = builder.header("content-type", "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// A listable catalog record.
#[must_use]
pub fn product_json(id: i64, name: &str, brand: &str, price: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "brand": brand,
        "price": price,
        "image_link": format!("https://img.example.com/{id}.png"),
        "product_type": "lip_liner",
    })
    .to_string()
}
