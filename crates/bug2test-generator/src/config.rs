//! Configuration for case generation and export
//!
//! Controls the tags attached to generated cases and the file layout of an
//! export directory.

use serde::{Deserialize, Serialize};

/// Configuration for the case generator and suite export
///
/// # Examples
///
/// ```
/// use bug2test_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.base_tag, "regression");
/// assert_eq!(config.artifact_file_name("abc"), "test_abc.py");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Tag carried by every generated case
    /// Default: "regression"
    pub base_tag: String,

    /// Tag added when the actual behavior mentions an error
    /// Default: "error-handling"
    pub error_tag: String,

    /// Tag added when the actual behavior mentions an exception
    /// Default: "exception"
    pub exception_tag: String,

    /// Companion file created once per export directory
    /// Default: "conftest.py"
    pub marker_file: String,

    /// Prefix of every case file name
    /// Default: "test_"
    pub artifact_prefix: String,

    /// Extension of every case file, without the dot
    /// Default: "py"
    pub artifact_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_tag: "regression".to_string(),
            error_tag: "error-handling".to_string(),
            exception_tag: "exception".to_string(),
            marker_file: "conftest.py".to_string(),
            artifact_prefix: "test_".to_string(),
            artifact_extension: "py".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_tag.trim().is_empty() {
            return Err("base_tag cannot be empty".to_string());
        }
        if self.marker_file.trim().is_empty() {
            return Err("marker_file cannot be empty".to_string());
        }
        for (name, value) in [
            ("marker_file", &self.marker_file),
            ("artifact_prefix", &self.artifact_prefix),
            ("artifact_extension", &self.artifact_extension),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(format!("{} cannot contain path separators", name));
            }
        }
        if self.artifact_extension.trim().is_empty() {
            return Err("artifact_extension cannot be empty".to_string());
        }
        Ok(())
    }

    /// File name for a case with the given id
    ///
    /// The id is lower-cased and every character outside `[a-z0-9_]` is
    /// replaced with `_`, one for one.
    pub fn artifact_file_name(&self, case_id: &str) -> String {
        let safe_id: String = case_id
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}{}.{}", self.artifact_prefix, safe_id, self.artifact_extension)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
