//! Input types for issue-tracker payloads

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Identifier field of an issue payload, numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueKey {
    /// Numeric identifier such as a GitHub issue number; any JSON number
    /// is accepted, including floats and values beyond `i64`
    Number(Number),
    /// Textual identifier
    Text(String),
}

impl IssueKey {
    /// Whether the key can serve as an identifier (non-zero, non-blank)
    pub fn is_usable(&self) -> bool {
        match self {
            IssueKey::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
            IssueKey::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKey::Number(n) => write!(f, "{}", n),
            IssueKey::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// An issue-tracker payload (e.g. a GitHub REST issue)
///
/// Only `number`, `id`, `title` and `body` are read; any other fields in
/// the source document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    /// Preferred identifier
    #[serde(default)]
    pub number: Option<IssueKey>,

    /// Fallback identifier
    #[serde(default)]
    pub id: Option<IssueKey>,

    /// Issue title
    #[serde(default)]
    pub title: Option<String>,

    /// Issue body (Markdown)
    #[serde(default)]
    pub body: Option<String>,
}

impl IssuePayload {
    /// Decode a payload from JSON text
    ///
    /// # Errors
    /// Returns [`ExtractorError::InvalidPayload`] if the document is not an
    /// object or a known field has the wrong type
    pub fn from_json(json: &str) -> Result<Self, ExtractorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// First usable identifier: `number`, then `id`
    pub fn key(&self) -> Option<&IssueKey> {
        self.number
            .iter()
            .chain(self.id.iter())
            .find(|key| key.is_usable())
    }
}
