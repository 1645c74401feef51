//! Evidence retrieval

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};
use verdix_search::{SearchHit, SearchProvider};

use crate::VerifierConfig;

/// Looks a claim up with a search provider
///
/// Any failure (transport, provider error, timeout) yields an empty list.
/// No retries are attempted.
#[derive(Clone)]
pub struct EvidenceRetriever {
    provider: Arc<dyn SearchProvider>,
    result_count: usize,
    timeout: Duration,
}

impl EvidenceRetriever {
    /// Create a retriever from a provider and the verifier settings
    pub fn new(provider: Arc<dyn SearchProvider>, config: &VerifierConfig) -> Self {
        Self {
            provider,
            result_count: config.result_count,
            timeout: config.search_timeout(),
        }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Retrieve raw hits for a claim, general results before news
    pub async fn retrieve(&self, claim: &str) -> Vec<SearchHit> {
        if claim.trim().is_empty() {
            debug!("Empty claim, skipping search");
            return Vec::new();
        }

        match timeout(self.timeout, self.provider.search(claim, self.result_count)).await {
            Ok(Ok(hits)) => {
                debug!("Provider '{}' returned {} hits", self.provider.name(), hits.len());
                hits
            }
            Ok(Err(e)) => {
                warn!("Evidence search via '{}' failed: {}", self.provider.name(), e);
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "Evidence search via '{}' timed out after {:?}",
                    self.provider.name(),
                    self.timeout
                );
                Vec::new()
            }
        }
    }
}
