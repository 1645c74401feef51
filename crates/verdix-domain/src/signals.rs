//! Lexical signal types: manipulation genome and virality

use serde::{Deserialize, Serialize};

/// Lexical manipulation indicators extracted from raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenomeSignals {
    /// Number of distinct panic keywords present
    pub panic_triggers: u32,
    /// Number of distinct medical keywords present
    pub medical_claims: u32,
    /// Occurrences of `!` and `?`
    pub emotional_markers: u32,
    /// Whole words of two or more uppercase letters
    pub capital_word_count: u32,
    /// Weighted sum of the above
    pub manipulation_score: u32,
}

impl GenomeSignals {
    /// Build signals from the four raw counts, deriving the manipulation score
    ///
    /// `manipulation_score = 3·panic + 2·medical + emotional + capitals`
    pub fn from_counts(
        panic_triggers: u32,
        medical_claims: u32,
        emotional_markers: u32,
        capital_word_count: u32,
    ) -> Self {
        let manipulation_score = 3 * panic_triggers
            + 2 * medical_claims
            + emotional_markers
            + capital_word_count;

        Self {
            panic_triggers,
            medical_claims,
            emotional_markers,
            capital_word_count,
            manipulation_score,
        }
    }
}

/// Virality risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViralityRisk {
    /// Score at most 30
    Low,
    /// Score above 30, at most 60
    Medium,
    /// Score above 60
    High,
}

impl ViralityRisk {
    /// Band a raw (unclamped) virality score
    pub fn from_score(score: u32) -> Self {
        if score > 60 {
            ViralityRisk::High
        } else if score > 30 {
            ViralityRisk::Medium
        } else {
            ViralityRisk::Low
        }
    }

    /// Get the band name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViralityRisk::Low => "Low",
            ViralityRisk::Medium => "Medium",
            ViralityRisk::High => "High",
        }
    }
}

/// Engagement-risk estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralityScore {
    /// Score clamped to [0, 100]
    pub virality_score: u8,
    /// Risk band
    pub risk: ViralityRisk,
}

impl ViralityScore {
    /// Build from a raw score; the band uses the raw value, the score is clamped
    pub fn from_raw(raw: u32) -> Self {
        Self {
            virality_score: raw.min(100) as u8,
            risk: ViralityRisk::from_score(raw),
        }
    }
}
