//! Configuration for the Verifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for evidence retrieval and classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Run evidence verification at all
    pub enabled: bool,

    /// Results requested from the search provider
    pub result_count: usize,

    /// Maximum time for a single search call (seconds)
    pub search_timeout_secs: u64,

    /// Evidence items kept per request; processing stops once reached
    pub max_sources: usize,

    /// Results ranked at or above this position are kept even if untrusted
    pub top_rank_cutoff: u32,

    /// Publisher domains exempt from the rank filter (substring match)
    pub trusted_domains: Vec<String>,

    /// Keywords marking a result as supporting the claim
    pub support_keywords: Vec<String>,

    /// Keywords marking a result as contradicting the claim (checked first)
    pub contradict_keywords: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            result_count: 10,
            search_timeout_secs: 8,
            max_sources: 3,
            top_rank_cutoff: 5,
            trusted_domains: words(&[
                "reuters.com",
                "bbc.com",
                "apnews.com",
                "thehindu.com",
                "indianexpress.com",
                "ndtv.com",
                "who.int",
                "gov.in",
                "altnews.in",
                "boomlive.in",
                "snopes.com",
                "politifact.com",
            ]),
            support_keywords: words(&["confirmed", "official", "announced", "launches", "reports"]),
            contradict_keywords: words(&[
                "fake",
                "false",
                "hoax",
                "misleading",
                "no evidence",
                "debunk",
                "fact check",
                "denies",
                "clarifies",
            ]),
        }
    }
}

impl VerifierConfig {
    /// Get the search timeout as a Duration
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.result_count == 0 {
            return Err("result_count must be greater than 0".to_string());
        }
        if self.search_timeout_secs == 0 {
            return Err("search_timeout_secs must be greater than 0".to_string());
        }
        if self.max_sources == 0 {
            return Err("max_sources must be greater than 0".to_string());
        }
        let lists = [
            ("trusted_domains", &self.trusted_domains),
            ("support_keywords", &self.support_keywords),
            ("contradict_keywords", &self.contradict_keywords),
        ];
        for (name, list) in lists {
            if list.iter().any(|w| w.trim().is_empty()) {
                return Err(format!("{} contains an empty entry", name));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VerifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search_timeout(), Duration::from_secs(8));
        assert_eq!(config.max_sources, 3);
    }

    #[test]
    fn test_zero_result_count_invalid() {
        let mut config = VerifierConfig::default();
        config.result_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_trusted_domain_invalid() {
        let mut config = VerifierConfig::default();
        config.trusted_domains.push(String::new());
        let err = config.validate().unwrap_err();
        assert!(err.contains("trusted_domains"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = VerifierConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = VerifierConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.trusted_domains, parsed.trusted_domains);
        assert_eq!(config.top_rank_cutoff, parsed.top_rank_cutoff);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = VerifierConfig::from_toml("enabled = false").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.result_count, 10);
    }
}
