//! Linear classifier over TF-IDF features
//!
//! Loads a persisted vectorizer + logistic regression pair from a single
//! JSON document and scores text without any network or native runtime.
//!
//! # Artifact format
//!
//! ```json
//! {
//!   "vocabulary": { "vaccine": 0, "official": 1 },
//!   "idf": [1.7, 2.1],
//!   "coefficients": [-0.8, 1.3],
//!   "intercept": 0.05,
//!   "lowercase": true
//! }
//! ```
//!
//! The positive class of the regression is "real".

use crate::ClassifierError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;
use verdix_domain::{ClassifierScore, TextClassifier};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Persisted vectorizer and regression weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Token to feature column
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    pub idf: Vec<f64>,
    /// Regression weight per column
    pub coefficients: Vec<f64>,
    /// Regression bias
    pub intercept: f64,
    /// Lower-case text before tokenizing
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

impl ModelArtifact {
    /// Check that the vocabulary, idf and weights line up
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.idf.len() != self.coefficients.len() {
            return Err(ClassifierError::InvalidArtifact(format!(
                "idf has {} columns but coefficients has {}",
                self.idf.len(),
                self.coefficients.len()
            )));
        }

        if let Some((token, column)) = self
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= self.idf.len())
        {
            return Err(ClassifierError::InvalidArtifact(format!(
                "token '{}' maps to column {} (only {} columns)",
                token,
                column,
                self.idf.len()
            )));
        }

        let finite = self.idf.iter().chain(&self.coefficients).all(|v| v.is_finite())
            && self.intercept.is_finite();
        if !finite {
            return Err(ClassifierError::InvalidArtifact(
                "weights must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Logistic regression over L2-normalized TF-IDF vectors
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    artifact: ModelArtifact,
    name: String,
}

impl LinearClassifier {
    /// Build a classifier from an in-memory artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        artifact.validate()?;
        Ok(Self {
            artifact,
            name: "linear".to_string(),
        })
    }

    /// Load and validate an artifact from a JSON file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file cannot be read
    /// - The JSON does not match the artifact schema
    /// - Column counts are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&contents)?;

        let mut classifier = Self::from_artifact(artifact)?;
        classifier.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "linear".to_string());

        info!(
            "Loaded classifier '{}' with {} features",
            classifier.name,
            classifier.artifact.idf.len()
        );

        Ok(classifier)
    }

    /// Sparse TF-IDF vector (column, weight), L2-normalized, ordered by column
    fn vectorize(&self, text: &str) -> Vec<(usize, f64)> {
        let owned;
        let text = if self.artifact.lowercase {
            owned = text.to_lowercase();
            owned.as_str()
        } else {
            text
        };

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in TOKEN_RE.find_iter(text) {
            if let Some(&column) = self.artifact.vocabulary.get(token.as_str()) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, tf)| (column, tf * self.artifact.idf[column]))
            .collect();

        let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut features {
                *w /= norm;
            }
        }
        features
    }
}

impl TextClassifier for LinearClassifier {
    fn predict(&self, text: &str) -> ClassifierScore {
        let decision = self
            .vectorize(text)
            .iter()
            .map(|&(column, w)| w * self.artifact.coefficients[column])
            .sum::<f64>()
            + self.artifact.intercept;

        ClassifierScore::from_real(sigmoid(decision))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
