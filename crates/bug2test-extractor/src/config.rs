//! Configuration for the Parser

use serde::{Deserialize, Serialize};

/// Configuration for the bug report parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of lines joined into a fallback description
    pub description_line_limit: usize,

    /// Prefix prepended to issue-tracker identifiers (e.g. `gh-42`)
    pub issue_id_prefix: String,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.description_line_limit == 0 {
            return Err("description_line_limit must be greater than 0".to_string());
        }
        if self.issue_id_prefix.chars().any(char::is_whitespace) {
            return Err("issue_id_prefix cannot contain whitespace".to_string());
        }
        Ok(())
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

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            description_line_limit: 5,
            issue_id_prefix: "gh-".to_string(),
        }
    }
}
