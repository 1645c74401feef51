//! Signal configuration
//!
//! Keyword sets used by the heuristics.

use serde::{Deserialize, Serialize};

/// Configuration for the rule-based signals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Keywords signalling panic or urgency pressure
    pub panic_keywords: Vec<String>,

    /// Keywords signalling medical claims
    pub medical_keywords: Vec<String>,

    /// Keywords counted by the virality estimator
    pub urgency_keywords: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            panic_keywords: words(&["urgent", "breaking", "shocking", "alert", "act now", "asap"]),
            medical_keywords: words(&["covid", "vaccine", "health", "doctor", "virus", "cancer"]),
            urgency_keywords: words(&["urgent", "breaking", "alert"]),
        }
    }
}

impl SignalConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let sets = [
            ("panic_keywords", &self.panic_keywords),
            ("medical_keywords", &self.medical_keywords),
            ("urgency_keywords", &self.urgency_keywords),
        ];

        for (name, set) in sets {
            if set.iter().any(|w| w.trim().is_empty()) {
                return Err(format!("{} contains an empty keyword", name));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
