//! Ordered collection of generated cases and its on-disk export

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::summary::ExportSummary;
use bug2test_domain::GeneratedCase;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Boilerplate written to a freshly created marker file
pub const MARKER_CONTENT: &str = "\"\"\"Conftest for bug2test generated regression cases.\"\"\"\n";

/// An ordered set of generated cases exported as one pytest directory
///
/// Cases are kept in insertion order and never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct CaseSuite {
    cases: Vec<GeneratedCase>,
    config: GeneratorConfig,
}

impl CaseSuite {
    /// Create an empty suite with default file layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty suite using the file layout from `config`
    pub fn with_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;
        Ok(Self {
            cases: Vec::new(),
            config,
        })
    }

    /// Append a case
    pub fn add(&mut self, case: GeneratedCase) {
        self.cases.push(case);
    }

    /// Cases in insertion order
    pub fn cases(&self) -> &[GeneratedCase] {
        &self.cases
    }

    /// Number of cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite holds no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Write every case into `dir`, one file each
    ///
    /// Creates `dir` if needed and the marker file if absent; an existing
    /// marker is left untouched. Case files are overwritten. Writes are not
    /// transactional: a failure part way leaves earlier files in place.
    /// Concurrent exports into the same directory are not supported.
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<ExportSummary, GeneratorError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| GeneratorError::io(dir, e))?;

        let marker_path = dir.join(&self.config.marker_file);
        let mut summary = ExportSummary::new(dir, &marker_path);
        summary.marker_created = create_marker(&marker_path)?;

        for case in &self.cases {
            let path = dir.join(self.config.artifact_file_name(case.id().as_str()));
            let content = format!("{}\n\n{}", case.setup_code(), case.test_code());
            fs::write(&path, content).map_err(|e| GeneratorError::io(&path, e))?;
            debug!("Wrote case '{}' to {}", case.id(), path.display());
            summary.record_write(&path);
        }

        info!(
            "Exported {} case(s) to {} (marker created: {})",
            summary.total_written(),
            dir.display(),
            summary.marker_created
        );
        Ok(summary)
    }
}

/// Create the marker file unless it already exists
///
/// Returns whether the file was created.
fn create_marker(path: &Path) -> Result<bool, GeneratorError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            fill_marker(file, path)?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Keeping existing marker {}", path.display());
            Ok(false)
        }
        Err(e) => Err(GeneratorError::io(path, e)),
    }
}

/// Write the boilerplate into a freshly created marker
///
/// A partially written marker is removed so a later export recreates it.
fn fill_marker<W: Write>(mut file: W, path: &Path) -> Result<(), GeneratorError> {
    if let Err(e) = file.write_all(MARKER_CONTENT.as_bytes()).and_then(|()| file.flush()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("Could not remove partial marker {}: {}", path.display(), remove_err);
        }
        return Err(GeneratorError::io(path, e));
    }
    Ok(())
}
