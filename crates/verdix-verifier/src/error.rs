//! Error types for the Verifier

use thiserror::Error;

/// Errors raised while building a verifier
///
/// Verification itself never fails; only construction can.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
