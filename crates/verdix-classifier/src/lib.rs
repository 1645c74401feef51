//! VerdiX Classifier Layer
//!
//! Implementations of the `TextClassifier` trait from `verdix-domain`.
//!
//! # Classifiers
//!
//! - `MockClassifier`: Deterministic fixed score for testing
//! - `LinearClassifier`: TF-IDF features + logistic regression, loaded from a
//!   JSON artifact at startup
//!
//! # Examples
//!
//! ```
//! use verdix_classifier::MockClassifier;
//! use verdix_domain::TextClassifier;
//!
//! let classifier = MockClassifier::new(0.8);
//! let score = classifier.predict("any text");
//! assert_eq!(score.base_confidence(), 80);
//! ```

#![warn(missing_docs)]

pub mod linear;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use verdix_domain::{ClassifierScore, TextClassifier};

pub use linear::{LinearClassifier, ModelArtifact};

/// Errors that can occur while loading a classifier artifact
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact is not valid JSON for the expected schema
    #[error("Failed to parse model artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// Artifact parsed but is internally inconsistent
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),
}

/// Mock classifier returning a fixed score
///
/// Clones share the same call counter.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    score: ClassifierScore,
    call_count: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Create a mock that always reports the given real-class probability
    pub fn new(real_probability: f64) -> Self {
        Self::with_score(ClassifierScore::from_real(real_probability))
    }

    /// Create a mock returning an exact score
    pub fn with_score(score: ClassifierScore) -> Self {
        Self {
            score,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times predict was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextClassifier for MockClassifier {
    fn predict(&self, _text: &str) -> ClassifierScore {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.score
    }

    fn name(&self) -> &str {
        "mock"
    }
}
