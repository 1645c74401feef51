//! Evidence and verification types

use serde::{Deserialize, Serialize};

/// Credibility label for a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Supported by evidence (or by the classifier alone)
    Real,
    /// Contradicted by evidence (or by the classifier alone)
    Fake,
    /// Evidence neither confirms nor refutes
    Unverified,
}

impl Verdict {
    /// Get the verdict name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "Real",
            Verdict::Fake => "Fake",
            Verdict::Unverified => "Unverified",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stance of a search result toward the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Result confirms the claim
    Supports,
    /// Result refutes or debunks the claim
    Contradicts,
    /// Neither
    Unclear,
}

/// A search result kept after trust/rank filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Result title as returned by the provider
    pub title: String,
    /// Result link
    pub url: String,
    /// Host of the link
    pub publisher: String,
    /// Relevance weight (currently always 1.0)
    pub match_score: f64,
    /// Stance toward the claim
    pub stance: Stance,
}

/// Outcome of evidence-based verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Evidence verdict
    pub verdict: Verdict,
    /// Human-readable reason for the verdict
    pub explanation: String,
    /// Retained evidence, in retrieval order
    pub sources: Vec<EvidenceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_wire_names() {
        assert_eq!(serde_json::to_string(&Stance::Supports).unwrap(), "\"supports\"");
        assert_eq!(serde_json::to_string(&Stance::Contradicts).unwrap(), "\"contradicts\"");
        assert_eq!(serde_json::to_string(&Stance::Unclear).unwrap(), "\"unclear\"");
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Unverified.to_string(), "Unverified");
    }
}
