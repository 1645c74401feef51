//! Core Analyzer implementation

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use verdix_domain::{AnalysisResult, TextClassifier, VerificationReport};
use verdix_search::SearchProvider;
use verdix_signals::SignalExtractor;

use crate::claim::extract_claim;
use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::evidence::classify_evidence;
use crate::retriever::EvidenceRetriever;
use crate::verdict::{resolve_evidence, resolve_status};

/// Verifies the central claim of a text against web evidence
#[derive(Clone)]
pub struct Verifier {
    retriever: EvidenceRetriever,
    config: VerifierConfig,
}

impl Verifier {
    /// Create a new Verifier
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        config: VerifierConfig,
    ) -> Result<Self, VerifierError> {
        config.validate().map_err(VerifierError::Config)?;

        Ok(Self {
            retriever: EvidenceRetriever::new(provider, &config),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Extract, look up and judge the claim in `text`
    ///
    /// Always produces a report; a failed search is an `Unverified` report
    /// with no sources.
    pub async fn verify(&self, text: &str) -> VerificationReport {
        let claim = extract_claim(text);
        debug!("Extracted claim: '{}'", claim);

        let hits = self.retriever.retrieve(&claim).await;
        let tally = classify_evidence(&hits, &self.config);

        info!(
            "Evidence for claim: {} hits, {} kept, {} supporting, {} contradicting",
            hits.len(),
            tally.items.len(),
            tally.support_count,
            tally.contradict_count
        );

        resolve_evidence(tally)
    }
}

/// Fuses classifier, signals and verification into one result
///
/// The classifier is shared read-only; one `Analyzer` serves every request.
#[derive(Clone)]
pub struct Analyzer {
    classifier: Arc<dyn TextClassifier>,
    signals: SignalExtractor,
    verifier: Option<Verifier>,
}

impl Analyzer {
    /// Create an analyzer without verification
    pub fn new(classifier: Arc<dyn TextClassifier>, signals: SignalExtractor) -> Self {
        Self {
            classifier,
            signals,
            verifier: None,
        }
    }

    /// Enable evidence verification
    pub fn with_verifier(mut self, verifier: Verifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Whether evidence verification will run
    pub fn verification_enabled(&self) -> bool {
        self.verifier.is_some()
    }

    /// Analyze a text
    ///
    /// Never fails: enrichment that cannot be computed is left absent and
    /// the verdict falls back to the classifier label.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();

        let score = self.classifier.predict(text);
        let genome_map = self.signals.genome(text);
        let link_report = self.signals.link_report(text);
        let virality = self.signals.virality(text);

        let verification = match &self.verifier {
            Some(verifier) => Some(verifier.verify(text).await),
            None => None,
        };

        let (status, confidence) = resolve_status(&score, verification.as_ref());

        info!(
            classifier = self.classifier.name(),
            real = score.real_probability,
            status = %status,
            confidence,
            verified = verification.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis complete"
        );

        AnalysisResult {
            status,
            confidence,
            genome_map,
            link_report,
            virality,
            verification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdix_classifier::MockClassifier;
    use verdix_domain::Verdict;
    use verdix_search::{MockSearchProvider, SearchHit};

    fn analyzer_with(hits: Vec<SearchHit>, real: f64) -> Analyzer {
        let verifier = Verifier::new(
            Arc::new(MockSearchProvider::new(hits)),
            VerifierConfig::default(),
        )
        .unwrap();

        Analyzer::new(Arc::new(MockClassifier::new(real)), SignalExtractor::default())
            .with_verifier(verifier)
    }

    #[tokio::test]
    async fn test_supported_claim_is_real() {
        let analyzer = analyzer_with(
            vec![
                SearchHit::new("Ministry confirmed bridge opening", "https://www.thehindu.com/a", 1),
                SearchHit::new("Official: bridge opens Monday", "https://www.ndtv.com/b", 2),
            ],
            0.9,
        );

        let result = analyzer.analyze("The new bridge over the river opens on Monday").await;
        assert_eq!(result.status, Verdict::Real);
        assert_eq!(result.confidence, 95);
        assert_eq!(result.verification.unwrap().sources.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let mut config = VerifierConfig::default();
        config.max_sources = 0;

        let result = Verifier::new(Arc::new(MockSearchProvider::default()), config);
        assert!(matches!(result, Err(VerifierError::Config(_))));
    }

    #[tokio::test]
    async fn test_without_verifier_falls_back() {
        let analyzer = Analyzer::new(Arc::new(MockClassifier::new(0.2)), SignalExtractor::default());

        let result = analyzer.analyze("anything").await;
        assert!(!analyzer.verification_enabled());
        assert_eq!(result.status, Verdict::Fake);
        assert_eq!(result.confidence, 80);
        assert!(result.verification.is_none());
    }
}
