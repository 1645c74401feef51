//! Configuration file parsing for the Router.
//!
//! Loads the bind address, classifier artifact path, search endpoint and the
//! `[signals]` / `[verification]` tables from TOML. The search API key is
//! never part of the file; it is read from [`API_KEY_ENV`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use verdix_search::serpapi::DEFAULT_ENDPOINT;
use verdix_signals::SignalConfig;
use verdix_verifier::VerifierConfig;

/// Environment variable holding the search API key
pub const API_KEY_ENV: &str = "VERDIX_SEARCH_API_KEY";

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Path to the classifier JSON artifact
    pub model_path: PathBuf,

    /// Search provider endpoint
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Longest accepted input text, in characters
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Keyword lists for the heuristic signals
    #[serde(default)]
    pub signals: SignalConfig,

    /// Evidence verification settings
    #[serde(default)]
    pub verification: VerifierConfig,
}

fn default_search_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_text_length() -> usize {
    50_000
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for unusable values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("model_path must not be empty".to_string()));
        }
        if self.max_text_length == 0 {
            return Err(ConfigError::Invalid(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        self.signals
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[signals] {}", e)))?;
        self.verification
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[verification] {}", e)))?;
        Ok(())
    }

    /// Create a default configuration for local runs and tests
    pub fn default_test_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            model_path: PathBuf::from("models/demo-linear.json"),
            search_endpoint: default_search_endpoint(),
            max_text_length: default_max_text_length(),
            signals: SignalConfig::default(),
            verification: VerifierConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Search API key from the environment, if set and non-blank
    pub fn search_api_key() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}
