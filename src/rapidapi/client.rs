//! HTTP client for the Real-Time Product Search API.

use super::endpoint::Endpoint;
use super::params::QueryParams;
use super::response::ApiResponse;
use crate::config::Settings;
use crate::error::{ConfigError, RequestError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Product search operations - enables mocking for tests.
///
/// Optional parameters are forwarded verbatim as query parameters. None of
/// the operations fail: errors come back as [`ApiResponse::Error`].
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Searches products across stores. `query` is sent as the `query` parameter.
    async fn search_products(&self, query: &str, params: &QueryParams) -> ApiResponse;

    /// Fetches details for one product.
    async fn get_product_details(&self, product_id: &str) -> ApiResponse;

    /// Fetches offers for one product.
    async fn get_product_offers(&self, product_id: &str, params: &QueryParams) -> ApiResponse;

    /// Fetches reviews for one product.
    async fn get_product_reviews(&self, product_id: &str, params: &QueryParams) -> ApiResponse;

    /// Fetches current deals and promotions.
    async fn get_deals(&self, params: &QueryParams) -> ApiResponse;

    /// Fetches reviews for one store.
    async fn get_store_reviews(&self, store_id: &str, params: &QueryParams) -> ApiResponse;
}

/// RapidAPI product search client.
///
/// Holds the key, base URL and derived headers; nothing changes after
/// construction.
pub struct ProductSearchClient {
    client: Client,
    api_key: String,
    base_url: String,
    host: String,
}

impl ProductSearchClient {
    /// Creates a client from settings. Fails when the API key is empty.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        if settings.rapid_api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs));

        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }

        if let Some(proxy_url) = &settings.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url.as_str())
                .map_err(|source| ConfigError::InvalidProxy { url: proxy_url.clone(), source })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let host = host_header(&base_url);

        debug!("Product search client ready for {}", host);

        Ok(Self { client, api_key: settings.rapid_api_key.clone(), base_url, host })
    }

    /// Creates a client from a plain settings mapping (`rapid_api_key`, `base_url`, ...).
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::new(&Settings::from_map(map))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value sent as the `X-RapidAPI-Host` header.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds the full request URL for an endpoint.
    fn url(&self, endpoint: Endpoint<'_>, params: &QueryParams) -> String {
        let url = format!("{}{}", self.base_url, endpoint.path());
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.to_query_string())
        }
    }

    /// Performs one GET and folds every failure into an error response.
    async fn get(&self, endpoint: Endpoint<'_>, params: &QueryParams) -> ApiResponse {
        info!("Fetching {}", endpoint.name());

        let url = self.url(endpoint, params);
        let response = ApiResponse::from(self.fetch(&url).await);

        if let Some(err) = response.error_message() {
            warn!("{} request failed: {}", endpoint.name(), err);
        }

        response
    }

    async fn fetch(&self, url: &str) -> Result<Value, RequestError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(API_HOST_HEADER, self.host.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(RequestError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.text().await.map_err(RequestError::Body)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductSearch for ProductSearchClient {
    async fn search_products(&self, query: &str, params: &QueryParams) -> ApiResponse {
        let params = params.merged_after(QueryParams::new().with("query", query));
        self.get(Endpoint::Search, &params).await
    }

    async fn get_product_details(&self, product_id: &str) -> ApiResponse {
        self.get(Endpoint::ProductDetails(product_id), &QueryParams::new()).await
    }

    async fn get_product_offers(&self, product_id: &str, params: &QueryParams) -> ApiResponse {
        self.get(Endpoint::ProductOffers(product_id), params).await
    }

    async fn get_product_reviews(&self, product_id: &str, params: &QueryParams) -> ApiResponse {
        self.get(Endpoint::ProductReviews(product_id), params).await
    }

    async fn get_deals(&self, params: &QueryParams) -> ApiResponse {
        self.get(Endpoint::Deals, params).await
    }

    async fn get_store_reviews(&self, store_id: &str, params: &QueryParams) -> ApiResponse {
        self.get(Endpoint::StoreReviews(store_id), params).await
    }
}

/// Derives the `X-RapidAPI-Host` value: the base URL without its scheme.
pub fn host_header(base_url: &str) -> String {
    let host = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    host.trim_end_matches('/').to_string()
}
