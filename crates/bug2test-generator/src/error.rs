//! Error types for generation and export

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring the generator or exporting cases
///
/// Converting a report never fails; only configuration and file-system
/// writes can.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// File-system failure while exporting
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
