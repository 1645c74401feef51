//! Fused analysis result

use crate::{GenomeSignals, LinkReport, Verdict, VerificationReport, ViralityScore};
use serde::{Deserialize, Serialize};

/// Final response for one analyzed text
///
/// Every well-formed input yields a complete value; enrichment that could
/// not be computed is `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final credibility label
    pub status: Verdict,
    /// Confidence in [0, 100]
    pub confidence: u8,
    /// Manipulation indicators
    pub genome_map: GenomeSignals,
    /// Report for the first URL, if any
    pub link_report: Option<LinkReport>,
    /// Engagement-risk estimate
    pub virality: ViralityScore,
    /// Evidence verification, if it ran
    pub verification: Option<VerificationReport>,
}
