//! VerdiX Verifier
//!
//! Claim verification and multi-signal fusion.
//!
//! # Overview
//!
//! The verifier reduces a text to one search-worthy claim, looks that claim
//! up with a [`SearchProvider`](verdix_search::SearchProvider), tags the top
//! results as supporting or contradicting, and resolves a verdict. The
//! [`Analyzer`] fuses that verdict with the classifier score and the
//! rule-based signals into an [`AnalysisResult`](verdix_domain::AnalysisResult).
//!
//! # Architecture
//!
//! ```text
//! Text ─┬─ Classifier ───────────────────────────────────┐
//!       ├─ Signals (genome, link, virality) ─────────────┤
//!       └─ Claim → Retriever → Evidence → Verdict ───────┴→ AnalysisResult
//! ```
//!
//! Search failures never surface: a failed or timed-out lookup is an empty
//! evidence set, which resolves to `Unverified`.
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use verdix_classifier::MockClassifier;
//! use verdix_search::MockSearchProvider;
//! use verdix_signals::SignalExtractor;
//! use verdix_verifier::{Analyzer, Verifier, VerifierConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let verifier = Verifier::new(
//!     Arc::new(MockSearchProvider::default()),
//!     VerifierConfig::default(),
//! )?;
//! let analyzer = Analyzer::new(Arc::new(MockClassifier::new(0.9)), SignalExtractor::default())
//!     .with_verifier(verifier);
//!
//! let result = analyzer.analyze("Officials announced the new bridge opens next week").await;
//! println!("{} ({}%)", result.status, result.confidence);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod claim;
mod config;
mod error;
mod evidence;
mod retriever;
mod types;
mod verdict;

pub use analyzer::{Analyzer, Verifier};
pub use claim::extract_claim;
pub use config::VerifierConfig;
pub use error::VerifierError;
pub use evidence::classify_evidence;
pub use retriever::EvidenceRetriever;
pub use types::EvidenceTally;
pub use verdict::{blend_confidence, resolve_evidence, resolve_status};
