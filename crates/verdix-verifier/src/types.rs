//! Intermediate types for verification

use verdix_domain::EvidenceItem;

/// Stance counts and retained evidence for one claim
///
/// Counts only cover the retained items: results after the cap are never
/// examined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceTally {
    /// Items tagged as supporting
    pub support_count: usize,
    /// Items tagged as contradicting
    pub contradict_count: usize,
    /// Retained items, in retrieval order
    pub items: Vec<EvidenceItem>,
}

impl EvidenceTally {
    /// True when no evidence survived filtering
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
