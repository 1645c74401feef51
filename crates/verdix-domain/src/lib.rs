//! VerdiX Domain Layer
//!
//! Value objects and trait interfaces shared by every VerdiX crate.
//!
//! ## Key Concepts
//!
//! - **ClassifierScore**: the (real, fake) probability pair from the text classifier
//! - **GenomeSignals**: lexical manipulation indicators
//! - **LinkReport**: hygiene score for the first URL in the text
//! - **ViralityScore**: engagement-risk estimate
//! - **VerificationReport**: evidence gathered for the text's central claim
//! - **AnalysisResult**: the fused verdict returned to callers
//!
//! ## Architecture
//!
//! This crate holds no infrastructure. Every type here is a request-scoped
//! value; the only long-lived collaborator is a [`traits::TextClassifier`]
//! implementation, which lives in `verdix-classifier`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod evidence;
pub mod link;
pub mod score;
pub mod signals;
pub mod traits;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use evidence::{EvidenceItem, Stance, Verdict, VerificationReport};
pub use link::{LinkReport, LinkVerdict};
pub use score::ClassifierScore;
pub use signals::{GenomeSignals, ViralityRisk, ViralityScore};
pub use traits::TextClassifier;
