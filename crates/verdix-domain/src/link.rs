//! Link hygiene report

use serde::{Deserialize, Serialize};

/// Risk verdict for a URL, derived from its fraud score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkVerdict {
    /// Score below 30
    #[serde(rename = "Low Risk")]
    LowRisk,
    /// Score at least 30, below 50
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    /// Score at least 50
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl LinkVerdict {
    /// Map a fraud score to its verdict
    pub fn from_score(score: u32) -> Self {
        if score >= 50 {
            LinkVerdict::HighRisk
        } else if score >= 30 {
            LinkVerdict::MediumRisk
        } else {
            LinkVerdict::LowRisk
        }
    }

    /// Get the verdict label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkVerdict::LowRisk => "Low Risk",
            LinkVerdict::MediumRisk => "Medium Risk",
            LinkVerdict::HighRisk => "High Risk",
        }
    }
}

/// Hygiene report for the first URL found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReport {
    /// Registrable domain (or bare host when none exists)
    pub domain: String,
    /// Accumulated risk points
    pub fraud_score: u32,
    /// Verdict derived from `fraud_score`
    pub verdict: LinkVerdict,
    /// Human-readable labels, in check order
    pub reasons: Vec<String>,
}

impl LinkReport {
    /// Create a report; the verdict is always derived from the score
    pub fn new(domain: impl Into<String>, fraud_score: u32, reasons: Vec<String>) -> Self {
        Self {
            domain: domain.into(),
            fraud_score,
            verdict: LinkVerdict::from_score(fraud_score),
            reasons,
        }
    }
}
