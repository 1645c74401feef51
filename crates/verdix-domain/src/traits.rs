//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::ClassifierScore;

/// Trait for a loaded, pre-trained binary text classifier
///
/// Implemented by the infrastructure layer (verdix-classifier).
/// Implementations are built once at startup and shared read-only across
/// requests, so inference takes `&self` and cannot fail.
pub trait TextClassifier: Send + Sync {
    /// Score a text as (real, fake) probabilities
    fn predict(&self, text: &str) -> ClassifierScore;

    /// Short model identifier for logs
    fn name(&self) -> &str {
        "classifier"
    }
}
