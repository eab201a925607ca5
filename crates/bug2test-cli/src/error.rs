//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parser construction or payload decoding error
    #[error(transparent)]
    Extractor(#[from] bug2test_extractor::ExtractorError),

    /// Case generation or export error
    #[error(transparent)]
    Generator(#[from] bug2test_generator::GeneratorError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Batch pattern matched nothing
    #[error("No files matching '{pattern}' found in {}.", dir.display())]
    NoMatchingFiles {
        /// Glob pattern given on the command line
        pattern: String,
        /// Directory that was searched
        dir: PathBuf,
    },
}
