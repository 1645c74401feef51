//! Virality estimation

use regex::Regex;
use std::sync::LazyLock;
use verdix_domain::ViralityScore;

use crate::genome::{count_present, emotional_markers};
use crate::SignalConfig;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

const URGENCY_WEIGHT: u32 = 20;
const PUNCTUATION_WEIGHT: u32 = 5;
const HASHTAG_WEIGHT: u32 = 10;

pub(crate) fn estimate_virality(text: &str, config: &SignalConfig) -> ViralityScore {
    let urgency = count_present(&text.to_lowercase(), &config.urgency_keywords);
    let punctuation = emotional_markers(text);
    let hashtags = HASHTAG_RE.find_iter(text).count() as u32;

    let raw = urgency * URGENCY_WEIGHT
        + punctuation.saturating_mul(PUNCTUATION_WEIGHT)
        + hashtags.saturating_mul(HASHTAG_WEIGHT);

    ViralityScore::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdix_domain::ViralityRisk;

    fn estimate(text: &str) -> ViralityScore {
        estimate_virality(text, &SignalConfig::default())
    }

    #[test]
    fn test_breaking_vaccine_scenario() {
        let score = estimate("BREAKING: Vaccine causes outbreak, act now!!!");
        assert_eq!(score.virality_score, 35);
        assert_eq!(score.risk, ViralityRisk::Medium);
    }

    #[test]
    fn test_hashtags_counted() {
        let score = estimate("#share #viral #now");
        assert_eq!(score.virality_score, 30);
        assert_eq!(score.risk, ViralityRisk::Low);
    }

    #[test]
    fn test_clamped_at_hundred() {
        let score = estimate("URGENT breaking alert!!!!!!!!!! #a #b");
        assert_eq!(score.virality_score, 100);
        assert_eq!(score.risk, ViralityRisk::High);
    }

    #[test]
    fn test_plain_text_is_low() {
        let score = estimate("The council met on Tuesday.");
        assert_eq!(score.virality_score, 0);
        assert_eq!(score.risk, ViralityRisk::Low);
    }
}
