//! Record of what one suite export touched on disk

use std::path::{Path, PathBuf};

/// Paths created or written by a single [`CaseSuite::export`] call
///
/// [`CaseSuite::export`]: crate::CaseSuite::export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Directory the suite was exported into
    pub output_dir: PathBuf,

    /// Location of the companion marker file
    pub marker_path: PathBuf,

    /// Whether this export created the marker (false when it already existed)
    pub marker_created: bool,

    /// Case files written, in suite order
    pub written: Vec<PathBuf>,
}

impl ExportSummary {
    /// Create an empty summary for an export into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, marker_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            marker_path: marker_path.into(),
            ..Self::default()
        }
    }

    /// Record a written case file
    pub fn record_write(&mut self, path: &Path) {
        self.written.push(path.to_path_buf());
    }

    /// Number of case files written
    pub fn total_written(&self) -> usize {
        self.written.len()
    }

    /// One-line marker status, e.g. `Marker: out/conftest.py (kept)`
    pub fn marker_line(&self) -> String {
        let marker_state = if self.marker_created {
            "created"
        } else {
            "kept"
        };
        format!("Marker: {} ({})", self.marker_path.display(), marker_state)
    }

    /// Human-readable summary of the export
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Export to {}", self.output_dir.display()),
            self.marker_line(),
            format!("Case files: {}", self.total_written()),
        ];
        for path in &self.written {
            lines.push(format!("  {}", path.display()));
        }
        lines.join("\n")
    }
}
