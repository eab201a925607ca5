//! Generated test case module

use crate::RecordId;

/// A regression-test stub rendered from one bug report
///
/// `source_id` refers to the originating [`crate::BugReport`] by id only;
/// the case does not own the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCase {
    id: RecordId,
    source_id: RecordId,
    setup_code: String,
    test_code: String,
    expected_result: String,
    tags: Vec<String>,
}

impl GeneratedCase {
    /// Create a case with empty code, no expected result and no tags
    pub fn new(id: RecordId, source_id: RecordId) -> Self {
        Self {
            id,
            source_id,
            setup_code: String::new(),
            test_code: String::new(),
            expected_result: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the setup (import preamble) code
    pub fn with_setup_code(mut self, code: impl Into<String>) -> Self {
        self.setup_code = code.into();
        self
    }

    /// Set the rendered test code
    pub fn with_test_code(mut self, code: impl Into<String>) -> Self {
        self.test_code = code.into();
        self
    }

    /// Set the expected result
    pub fn with_expected_result(mut self, expected: impl AsRef<str>) -> Self {
        self.expected_result = expected.as_ref().trim().to_string();
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case identifier
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Identifier of the report this case was generated from
    pub fn source_id(&self) -> &RecordId {
        &self.source_id
    }

    /// Import preamble
    pub fn setup_code(&self) -> &str {
        &self.setup_code
    }

    /// Rendered test module
    pub fn test_code(&self) -> &str {
        &self.test_code
    }

    /// Expected result text
    pub fn expected_result(&self) -> &str {
        &self.expected_result
    }

    /// Tags in derivation order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether the case carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
