//! Signal error types

use thiserror::Error;

/// Reasons a URL could not be assessed
///
/// These never escape the pipeline: a failed assessment becomes an absent
/// link report.
#[derive(Error, Debug, PartialEq)]
pub enum LinkError {
    /// The string is not a parseable URL
    #[error("Malformed URL: {0}")]
    Parse(#[from] url::ParseError),

    /// The URL parsed but carries no host
    #[error("URL has no host: {0}")]
    MissingHost(String),
}
