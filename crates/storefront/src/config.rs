//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_DATA_PATH` - Local store file (default: data/local_storage.json)
//! - `CATALOG_API_BASE` - Catalog API base URL
//!   (default: <https://makeup-api.herokuapp.com/api/v1>)
//! - `CATALOG_FEATURED_BRAND` - Brand shown on the home page (default: maybelline)
//! - `CATALOG_TIMEOUT_SECS` - Per-request timeout for catalog calls (default: none)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default catalog API base URL.
pub const DEFAULT_CATALOG_API_BASE: &str = "https://makeup-api.herokuapp.com/api/v1";

/// Default brand for the featured products on the home page.
pub const DEFAULT_FEATURED_BRAND: &str = "maybelline";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// File backing the local store
    pub data_path: PathBuf,
    /// External catalog API configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// External catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; `products.json` and `products/{id}.json` are resolved under it
    pub base_url: Url,
    /// Brand queried for the home page
    pub featured_brand: String,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Catalog configuration with defaults for everything but the base URL.
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            featured_brand: DEFAULT_FEATURED_BRAND.to_string(),
            timeout: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let host = vars
            .or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| invalid("STOREFRONT_HOST", &e))?;
        let port = vars
            .or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| invalid("STOREFRONT_PORT", &e))?;
        let data_path = PathBuf::from(vars.or_default("STOREFRONT_DATA_PATH", "data/local_storage.json"));

        let catalog = CatalogConfig::from_vars(&vars)?;

        Ok(Self {
            host,
            port,
            data_path,
            catalog,
            sentry_dsn: vars.optional("SENTRY_DSN"),
            sentry_environment: vars.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_vars<F>(vars: &Vars<'_, F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = Url::parse(&vars.or_default("CATALOG_API_BASE", DEFAULT_CATALOG_API_BASE))
            .map_err(|e| invalid("CATALOG_API_BASE", &e))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("CATALOG_API_BASE", &"not a base URL"));
        }

        let featured_brand = vars.or_default("CATALOG_FEATURED_BRAND", DEFAULT_FEATURED_BRAND);

        let timeout = match vars.optional("CATALOG_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => return Err(invalid("CATALOG_TIMEOUT_SECS", &"must be positive")),
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => return Err(invalid("CATALOG_TIMEOUT_SECS", &e)),
            },
        };

        Ok(Self {
            base_url,
            featured_brand,
            timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source with the default/optional conventions applied.
struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable; blank values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

fn invalid(key: &str, error: &impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), error.to_string())
}
