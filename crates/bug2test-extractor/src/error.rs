//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building the parser or decoding input
///
/// Parsing text itself never fails; these errors only arise at the
/// boundaries (pattern compilation, configuration, payload decoding).
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Issue payload has the wrong shape
    #[error("Invalid issue payload: {0}")]
    InvalidPayload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::InvalidPayload(e.to_string())
    }
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}
