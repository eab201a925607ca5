//! Bug report module - the structured form of a free-text report

use crate::RecordId;
use std::collections::BTreeMap;

/// A structured representation of a software bug report
///
/// Every string field is whitespace-trimmed on assignment. Missing
/// information is an empty string, sequence or map, never an `Option`.
/// Reports are immutable once built; the `with_*` methods consume the
/// report and return the updated value.
///
/// # Examples
///
/// ```
/// use bug2test_domain::{BugReport, RecordId};
///
/// let report = BugReport::new(RecordId::new("BUG-001").unwrap())
///     .with_title("  AttributeError on empty input ")
///     .with_steps(vec!["Call process('')".to_string()])
///     .with_environment_entry("python", "3.11");
///
/// assert_eq!(report.title(), "AttributeError on empty input");
/// assert_eq!(report.steps().len(), 1);
/// assert_eq!(report.environment()["python"], "3.11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugReport {
    id: RecordId,
    title: String,
    description: String,
    steps: Vec<String>,
    expected_behavior: String,
    actual_behavior: String,
    environment: BTreeMap<String, String>,
}

impl BugReport {
    /// Create an empty report with the given identifier
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            steps: Vec::new(),
            expected_behavior: String::new(),
            actual_behavior: String::new(),
            environment: BTreeMap::new(),
        }
    }

    /// Replace the identifier
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl AsRef<str>) -> Self {
        self.title = title.as_ref().trim().to_string();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = description.as_ref().trim().to_string();
        self
    }

    /// Set the reproduction steps, preserving order and duplicates
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.steps = steps
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();
        self
    }

    /// Set the expected behavior
    pub fn with_expected_behavior(mut self, expected: impl AsRef<str>) -> Self {
        self.expected_behavior = expected.as_ref().trim().to_string();
        self
    }

    /// Set the actual (buggy) behavior
    pub fn with_actual_behavior(mut self, actual: impl AsRef<str>) -> Self {
        self.actual_behavior = actual.as_ref().trim().to_string();
        self
    }

    /// Replace the environment map
    pub fn with_environment(mut self, environment: BTreeMap<String, String>) -> Self {
        self.environment = environment
            .into_iter()
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        self
    }

    /// Add or overwrite one environment entry
    pub fn with_environment_entry(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.environment.insert(
            key.as_ref().trim().to_string(),
            value.as_ref().trim().to_string(),
        );
        self
    }

    /// Report identifier
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Title, possibly empty
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description, possibly empty
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reproduction steps in document order
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Expected behavior, possibly empty
    pub fn expected_behavior(&self) -> &str {
        &self.expected_behavior
    }

    /// Actual behavior, possibly empty
    pub fn actual_behavior(&self) -> &str {
        &self.actual_behavior
    }

    /// Environment entries keyed by normalized name
    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = BugReport::new(id("BUG-001"));
        assert_eq!(report.id().as_str(), "BUG-001");
        assert!(report.title().is_empty());
        assert!(report.description().is_empty());
        assert!(report.steps().is_empty());
        assert!(report.expected_behavior().is_empty());
        assert!(report.actual_behavior().is_empty());
        assert!(report.environment().is_empty());
    }

    #[test]
    fn test_setters_trim() {
        let report = BugReport::new(id("BUG-002"))
            .with_description("\n  body text  \n")
            .with_expected_behavior(" works ")
            .with_actual_behavior(" crashes\t")
            .with_steps(["  one ", "two  "]);

        assert_eq!(report.description(), "body text");
        assert_eq!(report.expected_behavior(), "works");
        assert_eq!(report.actual_behavior(), "crashes");
        assert_eq!(report.steps(), ["one", "two"]);
    }

    #[test]
    fn test_steps_keep_duplicates() {
        let report = BugReport::new(id("BUG-003")).with_steps(["retry", "retry"]);
        assert_eq!(report.steps().len(), 2);
    }

    #[test]
    fn test_environment_entries_overwrite() {
        let report = BugReport::new(id("BUG-004"))
            .with_environment_entry(" os ", " linux ")
            .with_environment_entry("os", "macos");
        assert_eq!(report.environment().len(), 1);
        assert_eq!(report.environment()["os"], "macos");
    }

    #[test]
    fn test_with_id_replaces_identifier() {
        let report = BugReport::new(id("a")).with_title("T").with_id(id("b"));
        assert_eq!(report.id().as_str(), "b");
        assert_eq!(report.title(), "T");
    }
}
