//! VerdiX Router
//!
//! HTTP front end for the analysis pipeline. Loads the classifier artifact
//! once at startup, wires the search provider when a key is available, and
//! serves `POST /analyze`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::{ConfigError, RouterConfig, API_KEY_ENV};
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use verdix_classifier::{ClassifierError, LinearClassifier};
use verdix_search::{SearchError, SerpApiProvider};
use verdix_signals::SignalExtractor;
use verdix_verifier::{Analyzer, Verifier};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classifier artifact could not be loaded
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Search provider could not be constructed
    #[error("Search provider error: {0}")]
    Search(#[from] SearchError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the analysis pipeline described by `config`
///
/// Verification is attached only when it is enabled and `api_key` is set;
/// otherwise every request takes the classifier-only path.
pub fn build_analyzer(
    config: &RouterConfig,
    api_key: Option<String>,
) -> Result<Analyzer, RouterError> {
    config.validate()?;

    let classifier = LinearClassifier::load(&config.model_path)?;
    let signals = SignalExtractor::new(config.signals.clone());
    let analyzer = Analyzer::new(Arc::new(classifier), signals);

    if !config.verification.enabled {
        info!("Evidence verification disabled by configuration");
        return Ok(analyzer);
    }

    let Some(api_key) = api_key else {
        warn!("{} is not set; evidence verification disabled", API_KEY_ENV);
        return Ok(analyzer);
    };

    let provider = SerpApiProvider::with_endpoint(
        config.search_endpoint.clone(),
        api_key,
        config.verification.search_timeout(),
    )?;
    let verifier = Verifier::new(Arc::new(provider), config.verification.clone())
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;

    info!("Evidence verification via {}", config.search_endpoint);
    Ok(analyzer.with_verifier(verifier))
}

/// Start the Router HTTP server
///
/// Initializes tracing, builds the pipeline and serves until shutdown.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting VerdiX Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Model artifact: {}", config.model_path.display());

    let analyzer = build_analyzer(&config, RouterConfig::search_api_key())?;

    let state = AppState {
        analyzer: Arc::new(analyzer),
        max_text_length: config.max_text_length,
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_classifier_error() {
        let mut config = RouterConfig::default_test_config();
        config.model_path = "/nonexistent/model.json".into();

        let result = build_analyzer(&config, None);
        assert!(matches!(result, Err(RouterError::Classifier(ClassifierError::Io(_)))));
    }

    #[test]
    fn test_invalid_config_rejected_before_loading() {
        let mut config = RouterConfig::default_test_config();
        config.max_text_length = 0;

        let result = build_analyzer(&config, None);
        assert!(matches!(result, Err(RouterError::Config(ConfigError::Invalid(_)))));
    }
}
