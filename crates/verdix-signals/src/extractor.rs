//! Signal extractor facade

use tracing::debug;
use verdix_domain::{GenomeSignals, LinkReport, ViralityScore};

use crate::genome::extract_genome;
use crate::link::{assess_link, find_first_url};
use crate::virality::estimate_virality;
use crate::SignalConfig;

/// Computes the rule-based signals for a text
#[derive(Debug, Clone, Default)]
pub struct SignalExtractor {
    config: SignalConfig,
}

impl SignalExtractor {
    /// Create a new extractor with the given configuration
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Manipulation genome for a text
    pub fn genome(&self, text: &str) -> GenomeSignals {
        extract_genome(text, &self.config)
    }

    /// Virality estimate for a text
    pub fn virality(&self, text: &str) -> ViralityScore {
        estimate_virality(text, &self.config)
    }

    /// Link report for the first URL in a text
    ///
    /// Returns `None` when the text has no URL or the URL cannot be assessed.
    pub fn link_report(&self, text: &str) -> Option<LinkReport> {
        let url = find_first_url(text)?;
        match assess_link(url) {
            Ok(report) => Some(report),
            Err(e) => {
                debug!("Skipping link report: {}", e);
                None
            }
        }
    }
}
