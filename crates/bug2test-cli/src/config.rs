//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use bug2test_extractor::ParserConfig;
use bug2test_generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Report parsing
    #[serde(default)]
    pub parser: ParserConfig,

    /// Case generation and export layout
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Output directory used when `--output` is not given
    #[serde(default = "default_output_dir")]
    pub default_output_dir: PathBuf,

    /// Batch glob used when `--pattern` is not given
    #[serde(default = "default_pattern")]
    pub default_pattern: String,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".bug2test").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => match Self::path() {
                Ok(path) if path.exists() => Self::load_from(&path)?,
                _ => {
                    debug!("No configuration file found; using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        if self.settings.default_pattern.trim().is_empty() {
            return Err(CliError::Config("default_pattern cannot be empty".into()));
        }
        self.parser
            .validate()
            .map_err(|e| CliError::Config(format!("[parser] {}", e)))?;
        self.generator
            .validate()
            .map_err(|e| CliError::Config(format!("[generator] {}", e)))?;
        Ok(())
    }

    /// Serialize configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            default_output_dir: default_output_dir(),
            default_pattern: default_pattern(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("benchmark")
}

fn default_pattern() -> String {
    "*.md".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.default_output_dir, PathBuf::from("benchmark"));
        assert_eq!(config.settings.default_pattern, "*.md");
        assert_eq!(config.parser.issue_id_prefix, "gh-");
        assert_eq!(config.generator.marker_file, "conftest.py");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\ncolor = false\n\n[parser]\nissue_id_prefix = \"jira-\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.default_pattern, "*.md");
        assert_eq!(config.parser.issue_id_prefix, "jira-");
        assert_eq!(config.parser.description_line_limit, 5);
        assert_eq!(config.generator.base_tag, "regression");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings\ncolor = ").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_invalid_section_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[parser]\ndescription_line_limit = 0\n").unwrap();
        match Config::load(Some(&path)) {
            Err(CliError::Config(msg)) => assert!(msg.starts_with("[parser]")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
