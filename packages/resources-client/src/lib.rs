//! Community resource directory REST client.
//!
//! A minimal client for the read-only resource API. Supports listing
//! resources with optional category/location filters and fetching the
//! filter dropdown seeds.
//!
//! # Example
//!
//! ```rust,ignore
//! use resources_client::{ResourceFilters, ResourcesClient};
//!
//! let client = ResourcesClient::new("https://api.example.org/api/");
//!
//! let filters = ResourceFilters::from_selection("housing", "All");
//! for resource in client.fetch_resources(&filters).await? {
//!     println!("{} ({})", resource.name, resource.phone);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ResourcesError, Result};
pub use types::{FilterOptions, Resource, ResourceFilters, ResourceId, ALL};

#[cfg(not(target_arch = "wasm32"))]
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "RESOURCES_API_BASE_URL";

/// Read-only operations against the resource backend.
///
/// `ResourcesClient` is the HTTP implementation; tests drive the query
/// runtime with in-memory implementations. Not available on wasm, where
/// reqwest futures are not `Send`; the browser calls the inherent methods.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List resources, scoped by the given filters.
    async fn fetch_resources(&self, filters: &ResourceFilters) -> Result<Vec<Resource>>;

    /// Fetch the category/location dropdown seeds.
    async fn fetch_filter_options(&self) -> Result<FilterOptions>;
}

#[derive(Clone)]
pub struct ResourcesClient {
    client: reqwest::Client,
    base_url: String,
}

impl ResourcesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client` (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variable `RESOURCES_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ResourcesError::Config(format!("{} not set", BASE_URL_ENV)))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, ?query, "Requesting resource API");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::error!(path, error = %e, "API request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::error!(path, status = status.as_u16(), "API request failed");
            return Err(ResourcesError::Request {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `GET {base}/resources`, scoped by the given filters.
    pub async fn fetch_resources(&self, filters: &ResourceFilters) -> Result<Vec<Resource>> {
        let body = self.get_json("resources", &filters.query_pairs()).await?;
        let resources = types::decode_resources(body)?;
        tracing::debug!(count = resources.len(), ?filters, "Fetched resources");
        Ok(resources)
    }

    /// `GET {base}/resources/filters`.
    pub async fn fetch_filter_options(&self) -> Result<FilterOptions> {
        let body = self.get_json("resources/filters", &[]).await?;
        types::decode_filter_options(body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl ResourceApi for ResourcesClient {
    async fn fetch_resources(&self, filters: &ResourceFilters) -> Result<Vec<Resource>> {
        ResourcesClient::fetch_resources(self, filters).await
    }

    async fn fetch_filter_options(&self) -> Result<FilterOptions> {
        ResourcesClient::fetch_filter_options(self).await
    }
}
