//! Manipulation genome: keyword presence, punctuation and capitalization

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use verdix_domain::GenomeSignals;

use crate::SignalConfig;

static CAPITAL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex"));

/// Count how many distinct keywords occur anywhere in `lowered`
///
/// Presence, not frequency: a keyword repeated five times counts once.
/// `lowered` must already be lower-cased.
pub(crate) fn count_present(lowered: &str, keywords: &[String]) -> u32 {
    keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect::<HashSet<_>>()
        .iter()
        .filter(|k| lowered.contains(k.as_str()))
        .count() as u32
}

/// Occurrences of `!` and `?`
pub(crate) fn emotional_markers(text: &str) -> u32 {
    text.chars().filter(|c| matches!(c, '!' | '?')).count() as u32
}

fn capital_word_count(text: &str) -> u32 {
    CAPITAL_WORD_RE.find_iter(text).count() as u32
}

pub(crate) fn extract_genome(text: &str, config: &SignalConfig) -> GenomeSignals {
    let lowered = text.to_lowercase();

    GenomeSignals::from_counts(
        count_present(&lowered, &config.panic_keywords),
        count_present(&lowered, &config.medical_keywords),
        emotional_markers(text),
        capital_word_count(text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaking_vaccine_scenario() {
        let genome = extract_genome(
            "BREAKING: Vaccine causes outbreak, act now!!!",
            &SignalConfig::default(),
        );

        assert_eq!(genome.panic_triggers, 2);
        assert_eq!(genome.medical_claims, 1);
        assert_eq!(genome.emotional_markers, 3);
        assert_eq!(genome.capital_word_count, 1);
        assert_eq!(genome.manipulation_score, 12);
    }

    #[test]
    fn test_presence_not_frequency() {
        let lowered = "virus virus virus virus virus";
        let keywords = SignalConfig::default().medical_keywords;
        assert_eq!(count_present(lowered, &keywords), 1);
    }

    #[test]
    fn test_duplicate_keywords_count_once() {
        let keywords = vec!["Alert".to_string(), "alert".to_string()];
        assert_eq!(count_present("red alert", &keywords), 1);
    }

    #[test]
    fn test_single_capital_letters_ignored() {
        assert_eq!(capital_word_count("I saw A cat"), 0);
        assert_eq!(capital_word_count("WHO and CDC say OK"), 3);
    }

    #[test]
    fn test_mixed_case_word_not_capital() {
        assert_eq!(capital_word_count("NASAs report"), 0);
    }

    #[test]
    fn test_empty_text() {
        let genome = extract_genome("", &SignalConfig::default());
        assert_eq!(genome, GenomeSignals::default());
    }
}
