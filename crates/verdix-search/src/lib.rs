//! VerdiX Search Provider Layer
//!
//! Web search backends used to gather evidence for a claim.
//!
//! # Providers
//!
//! - `MockSearchProvider`: Deterministic canned results for testing
//! - `SerpApiProvider`: SerpApi-compatible JSON search over HTTPS
//!
//! Providers report failures as typed [`SearchError`]s. Deciding what a
//! failure means for a verdict is left to the caller.
//!
//! # Examples
//!
//! ```
//! use verdix_search::{MockSearchProvider, SearchHit, SearchProvider};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockSearchProvider::new(vec![
//!     SearchHit::new("Officials confirm launch", "https://www.reuters.com/a", 1),
//! ]);
//! let hits = provider.search("launch", 10).await.unwrap();
//! assert_eq!(hits.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod serpapi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use serpapi::SerpApiProvider;

/// Errors that can occur during a search call
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded its time bound
    #[error("Search timed out")]
    Timeout,

    /// Non-success HTTP status without a provider error message
    #[error("HTTP status {0}")]
    Status(u16),

    /// The provider answered with an explicit error payload
    #[error("Provider error: {0}")]
    Provider(String),

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// One raw result record as returned by a provider
///
/// Every field may be missing; consumers decide which hits are usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title
    #[serde(default)]
    pub title: Option<String>,
    /// Result URL
    #[serde(default)]
    pub link: Option<String>,
    /// Result summary text
    #[serde(default)]
    pub snippet: Option<String>,
    /// 1-based rank reported by the provider
    #[serde(default)]
    pub position: Option<u32>,
}

impl SearchHit {
    /// Build a hit with title, link and rank
    pub fn new(title: impl Into<String>, link: impl Into<String>, position: u32) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link.into()),
            snippet: None,
            position: Some(position),
        }
    }

    /// Attach a snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// Trait for web search backends
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for `query`, asking for up to `count` results per list
    ///
    /// General web results come before news results.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchHit>, SearchError>;

    /// Short provider identifier for logs
    fn name(&self) -> &str {
        "search"
    }
}

/// Mock provider returning canned hits without any network calls
///
/// Clones share recorded queries.
#[derive(Debug, Clone, Default)]
pub struct MockSearchProvider {
    hits: Vec<SearchHit>,
    fail: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchProvider {
    /// Create a mock returning the given hits for every query
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    /// Create a mock whose every call fails with a transport error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Queries received so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str, _count: usize) -> Result<Vec<SearchHit>, SearchError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        if self.fail {
            return Err(SearchError::Transport("mock failure".to_string()));
        }
        Ok(self.hits.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
