//! Verdict resolution
//!
//! Two stages: evidence counts produce a verification verdict, then that
//! verdict (when present) overrides the classifier label and shifts its
//! confidence.

use verdix_domain::{ClassifierScore, Verdict, VerificationReport};

use crate::types::EvidenceTally;

const FAKE_EXPLANATION: &str = "Multiple trusted sources contradict or debunk this claim.";
const REAL_EXPLANATION: &str = "Trusted sources support or confirm this claim.";
const UNVERIFIED_EXPLANATION: &str = "Sources mention the topic but do not clearly confirm it.";

const REAL_BOOST: u8 = 20;
const REAL_CEILING: u8 = 95;
const FAKE_BOOST: u8 = 15;
const FAKE_CEILING: u8 = 98;
const UNVERIFIED_PENALTY: u8 = 20;
const UNVERIFIED_FLOOR: u8 = 40;

/// Stage A: turn an evidence tally into a verification report
///
/// Contradictions must strictly outnumber support for `Fake`; a tie,
/// including zero evidence, never yields `Fake`.
pub fn resolve_evidence(tally: EvidenceTally) -> VerificationReport {
    let (verdict, explanation) = if tally.contradict_count > tally.support_count {
        (Verdict::Fake, FAKE_EXPLANATION)
    } else if tally.support_count > 0 {
        (Verdict::Real, REAL_EXPLANATION)
    } else {
        (Verdict::Unverified, UNVERIFIED_EXPLANATION)
    };

    VerificationReport {
        verdict,
        explanation: explanation.to_string(),
        sources: tally.items,
    }
}

/// Shift a base confidence according to the final status
///
/// | status     | confidence            |
/// |------------|-----------------------|
/// | Real       | min(95, base + 20)    |
/// | Fake       | min(98, base + 15)    |
/// | Unverified | max(40, base - 20)    |
pub fn blend_confidence(status: Verdict, base: u8) -> u8 {
    let base = base.min(100);
    match status {
        Verdict::Real => base.saturating_add(REAL_BOOST).min(REAL_CEILING),
        Verdict::Fake => base.saturating_add(FAKE_BOOST).min(FAKE_CEILING),
        Verdict::Unverified => base.saturating_sub(UNVERIFIED_PENALTY).max(UNVERIFIED_FLOOR),
    }
}

/// Stage B: final status and confidence
///
/// Without a verification report the classifier's own label and base
/// confidence are returned unchanged.
pub fn resolve_status(
    score: &ClassifierScore,
    verification: Option<&VerificationReport>,
) -> (Verdict, u8) {
    let base = score.base_confidence();

    match verification {
        Some(report) => (report.verdict, blend_confidence(report.verdict, base)),
        None => (score.label(), base),
    }
}
