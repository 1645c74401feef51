//! VerdiX Signals
//!
//! Rule-based, dependency-free text signals.
//!
//! The crate provides:
//! - Manipulation genome (panic/medical keywords, punctuation, capitals)
//! - Link hygiene assessment for the first URL in a text
//! - Virality estimation (urgency, punctuation, hashtags)
//!
//! All keyword sets live in [`SignalConfig`] so they can be tuned without
//! touching the scoring code.
//!
//! # Examples
//!
//! ```
//! use verdix_signals::{SignalConfig, SignalExtractor};
//!
//! let extractor = SignalExtractor::new(SignalConfig::default());
//! let genome = extractor.genome("BREAKING: Vaccine causes outbreak, act now!!!");
//! assert_eq!(genome.manipulation_score, 12);
//!
//! let report = extractor.link_report("see http://192.168.1.5/page").unwrap();
//! assert_eq!(report.fraud_score, 60);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod genome;
mod link;
mod virality;

pub use config::SignalConfig;
pub use error::LinkError;
pub use extractor::SignalExtractor;
pub use link::{assess_link, find_first_url};
