//! SerpApi Provider Implementation
//!
//! Issues a single Google-engine query against a SerpApi-compatible endpoint
//! and merges the organic and news result lists.
//!
//! # Features
//!
//! - HTTPS endpoint, configurable for self-hosted proxies
//! - Request timeout (no retries)
//! - Provider `error` payloads surfaced as [`SearchError::Provider`]
//! - Malformed individual hits dropped without failing the batch
//!
//! # Examples
//!
//! ```no_run
//! use verdix_search::{SerpApiProvider, SearchProvider};
//!
//! # async fn example() -> Result<(), verdix_search::SearchError> {
//! let key = std::env::var("VERDIX_SEARCH_API_KEY").unwrap_or_default();
//! let provider = SerpApiProvider::new(key)?;
//! let hits = provider.search("WHO confirms new guidance", 10).await?;
//! # Ok(())
//! # }
//! ```

use crate::{SearchError, SearchHit, SearchProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default SerpApi search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";

/// Default timeout for search requests (8 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Search engine parameter sent with every query
const ENGINE: &str = "google";

/// SerpApi-compatible search provider
pub struct SerpApiProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

/// Top-level response body
#[derive(Deserialize, Default)]
struct SerpApiResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    organic_results: Vec<Value>,
    #[serde(default)]
    news_results: Vec<Value>,
}

impl SerpApiProvider {
    /// Create a provider for the default endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider for a specific endpoint and timeout
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("https://") {
            warn!("Search endpoint {} is not https; the API key will travel in clear text", endpoint);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key: api_key.into(),
            client,
            timeout,
        })
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>, SearchError> {
        let num = count.to_string();
        let params = [
            ("engine", ENGINE),
            ("q", query),
            ("api_key", self.api_key.as_str()),
            ("num", num.as_str()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport)?;

        let hits = parse_response(&body, status.as_u16())?;
        info!(count = hits.len(), "Search complete");
        Ok(hits)
    }

    fn name(&self) -> &str {
        "serpapi"
    }
}

fn map_transport(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Transport(e.to_string())
    }
}

/// Decode a response body into hits, organic results first
///
/// A provider `error` field wins over the HTTP status so its message is kept.
pub(crate) fn parse_response(body: &str, status: u16) -> Result<Vec<SearchHit>, SearchError> {
    let parsed: Result<SerpApiResponse, _> = serde_json::from_str(body);

    let data = match parsed {
        Ok(data) => data,
        Err(_) if !(200..300).contains(&status) => return Err(SearchError::Status(status)),
        Err(e) => return Err(SearchError::Decode(e.to_string())),
    };

    if let Some(message) = data.error {
        return Err(SearchError::Provider(message));
    }
    if !(200..300).contains(&status) {
        return Err(SearchError::Status(status));
    }

    let hits = data
        .organic_results
        .into_iter()
        .chain(data.news_results)
        .filter_map(|raw| match serde_json::from_value::<SearchHit>(raw) {
            Ok(hit) => Some(hit),
            Err(e) => {
                debug!("Dropping malformed hit: {}", e);
                None
            }
        })
        .collect();

    Ok(hits)
}
