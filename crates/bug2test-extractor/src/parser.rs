//! Bug report parser: raw text or issue payloads into [`BugReport`]s

use crate::config::ParserConfig;
use crate::error::ExtractorError;
use crate::extract::{extract_environment, extract_steps};
use crate::patterns::{PatternLibrary, Section};
use crate::types::IssuePayload;
use bug2test_domain::{BugReport, IdGenerator, RecordId, UuidIdGenerator};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Parses plain-text or Markdown bug reports into structured reports
///
/// Sections are recognised by Markdown headings (`## Steps to Reproduce`)
/// or, when a document has no headings at all, by inline labels
/// (`Expected: ...`). Missing structure never fails a parse; it falls back
/// to first-line titles and leading-line descriptions.
pub struct BugParser<G = UuidIdGenerator> {
    patterns: PatternLibrary,
    config: ParserConfig,
    ids: G,
}

impl BugParser<UuidIdGenerator> {
    /// Create a parser generating random report ids
    pub fn new(config: ParserConfig) -> Result<Self, ExtractorError> {
        Self::with_id_generator(config, UuidIdGenerator::default())
    }

    /// Create a parser with default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ParserConfig::default())
    }
}

impl<G: IdGenerator> BugParser<G> {
    /// Create a parser drawing report ids from `ids`
    pub fn with_id_generator(config: ParserConfig, ids: G) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            patterns: PatternLibrary::compile()?,
            config,
            ids,
        })
    }

    /// The compiled rule tables used by this parser
    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    /// The active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a plain-text or Markdown bug report
    ///
    /// Every call assigns a fresh id, so parsing the same text twice yields
    /// two distinct reports.
    pub fn parse(&self, text: &str) -> BugReport {
        self.build_report(text, self.ids.next_id())
    }

    /// Parse an issue-tracker payload
    ///
    /// The id is the configured prefix followed by `number`, `id`, or a
    /// fresh token, in that order of preference. The payload title wins
    /// over one found in the body; every other field comes from the body.
    pub fn parse_external_issue(&self, payload: &IssuePayload) -> BugReport {
        let token = payload
            .key()
            .and_then(|key| RecordId::new(key.to_string()).ok())
            .unwrap_or_else(|| self.ids.next_id());
        let id = RecordId::prefixed(&self.config.issue_id_prefix, &token);

        let partial = self.build_report(payload.body.as_deref().unwrap_or(""), id);
        let title = payload
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| partial.title().to_string());

        partial.with_title(title)
    }

    fn build_report(&self, text: &str, id: RecordId) -> BugReport {
        let sections = self.recover_sections(text);
        let section = |name: Section| sections.get(&name).map(String::as_str).unwrap_or("");

        let title = match section(Section::Title) {
            "" => fallback_title(text),
            found => found.to_string(),
        };
        let description = match section(Section::Description) {
            "" => fallback_description(text, self.config.description_line_limit),
            found => found.to_string(),
        };

        let report = BugReport::new(id)
            .with_title(title)
            .with_description(description)
            .with_steps(extract_steps(&self.patterns, section(Section::Steps)))
            .with_expected_behavior(section(Section::Expected))
            .with_actual_behavior(section(Section::Actual))
            .with_environment(extract_environment(&self.patterns, section(Section::Environment)));

        info!(
            "Parsed report '{}': {} steps, {} environment entries",
            report.id(),
            report.steps().len(),
            report.environment().len()
        );
        report
    }

    /// Section bodies keyed by section; headings take precedence over
    /// inline labels
    fn recover_sections(&self, text: &str) -> BTreeMap<Section, String> {
        let hits = self.patterns.heading_hits(text);
        let mut sections = BTreeMap::new();

        if hits.is_empty() {
            for line in text.lines() {
                if let Some((section, value)) = self.patterns.match_inline(line) {
                    sections
                        .entry(section)
                        .or_insert_with(|| value.trim().to_string());
                }
            }
            debug!("No headings found; {} inline sections recovered", sections.len());
            return sections;
        }

        debug!("Found {} section headings", hits.len());
        for (idx, hit) in hits.iter().enumerate() {
            let end = hits.get(idx + 1).map_or(text.len(), |next| next.offset);
            let span = &text[hit.offset..end];
            // Drop the heading line itself
            let body = span.find('\n').map_or("", |nl| &span[nl + 1..]).trim();

            if let Some(previous) = sections.insert(hit.section, body.to_string()) {
                if !previous.is_empty() {
                    debug!("Repeated '{}' heading replaces earlier section body", hit.section);
                }
            }
        }
        sections
    }
}

/// First non-empty line with heading markers removed
fn fallback_title(text: &str) -> String {
    text.lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Up to `limit` non-empty lines after the first line, space-joined
fn fallback_description(text: &str, limit: usize) -> String {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bug2test_domain::SequentialIdGenerator;

    const MARKDOWN_REPORT: &str = "\
# Bug Report

## Title
AttributeError on empty input

## Description
Passing an empty string to the process() function causes an AttributeError.
This happens because the return value is None when the input is empty.

## Steps to Reproduce
1. Import the module: `from mypackage import process`
2. Call `process('')` with an empty string
3. Observe the AttributeError traceback

## Expected Behavior
The function should return an empty result without raising an exception.

## Actual Behavior
AttributeError: 'NoneType' object has no attribute 'strip'

## Environment
- Python: 3.11
- OS: Linux
- Package version: 1.2.3
";

    fn parser() -> BugParser<SequentialIdGenerator> {
        BugParser::with_id_generator(ParserConfig::default(), SequentialIdGenerator::new("bug-"))
            .unwrap()
    }

    #[test]
    fn test_parse_markdown_sections() {
        let report = parser().parse(MARKDOWN_REPORT);

        assert_eq!(report.id().as_str(), "bug-1");
        assert_eq!(report.title(), "AttributeError on empty input");
        assert!(report.description().starts_with("Passing an empty string"));
        assert!(report.description().ends_with("the input is empty."));
        assert_eq!(report.steps().len(), 3);
        assert_eq!(report.steps()[1], "Call `process('')` with an empty string");
        assert_eq!(
            report.expected_behavior(),
            "The function should return an empty result without raising an exception."
        );
        assert_eq!(
            report.actual_behavior(),
            "AttributeError: 'NoneType' object has no attribute 'strip'"
        );
        assert_eq!(report.environment()["python"], "3.11");
        assert_eq!(report.environment()["os"], "Linux");
        assert_eq!(report.environment()["package_version"], "1.2.3");
    }

    #[test]
    fn test_section_content_excludes_heading_line() {
        let text = "## Expected Result\nfirst\nsecond\n## Actual Result\nthird";
        let report = parser().parse(text);
        assert_eq!(report.expected_behavior(), "first\nsecond");
        assert_eq!(report.actual_behavior(), "third");
    }

    #[test]
    fn test_repeated_heading_last_wins() {
        let text = "## Actual Behavior\nold\n## Actual Behavior\nnew\n";
        let report = parser().parse(text);
        assert_eq!(report.actual_behavior(), "new");
    }

    #[test]
    fn test_heading_on_last_line_has_empty_body() {
        let report = parser().parse("Crash report\n## Expected Behavior");
        assert_eq!(report.expected_behavior(), "");
        assert_eq!(report.title(), "Crash report");
    }

    #[test]
    fn test_inline_labels() {
        let text = "Title: KeyError when accessing missing config key\n\
                    Expected: Should return default value\n\
                    Actual: KeyError raised\n";
        let report = parser().parse(text);
        assert_eq!(report.title(), "KeyError when accessing missing config key");
        assert_eq!(report.expected_behavior(), "Should return default value");
        assert_eq!(report.actual_behavior(), "KeyError raised");
        assert!(report.steps().is_empty());
    }

    #[test]
    fn test_inline_first_match_per_field_wins() {
        let text = "Expected: first\nExpected: second\n";
        let report = parser().parse(text);
        assert_eq!(report.expected_behavior(), "first");
    }

    #[test]
    fn test_inline_ignored_when_headings_present() {
        let text = "## Title\nHeading title\nExpected: inline value\n";
        let report = parser().parse(text);
        assert_eq!(report.title(), "Heading title\nExpected: inline value");
        assert_eq!(report.expected_behavior(), "");
    }

    #[test]
    fn test_plain_text_fallbacks() {
        let text = "First line is the title\nSecond line is content.";
        let report = parser().parse(text);
        assert_eq!(report.title(), "First line is the title");
        assert_eq!(report.description(), "Second line is content.");
    }

    #[test]
    fn test_title_fallback_strips_hashes() {
        let report = parser().parse("\n\n  # Bug Report  \nbody");
        assert_eq!(report.title(), "Bug Report");
    }

    #[test]
    fn test_description_fallback_is_limited() {
        let text = "title\n1\n\n2\n3\n4\n5\n6\n7";
        let report = parser().parse(text);
        assert_eq!(report.description(), "1 2 3 4 5");
    }

    #[test]
    fn test_description_fallback_respects_config() {
        let config = ParserConfig {
            description_line_limit: 2,
            ..ParserConfig::default()
        };
        let parser = BugParser::with_id_generator(config, SequentialIdGenerator::new("b")).unwrap();
        assert_eq!(parser.parse("t\na\nb\nc").description(), "a b");
    }

    #[test]
    fn test_unordered_steps() {
        let text = "## Steps to Reproduce\n- Step one\n- Step two\n- Step three\n";
        let report = parser().parse(text);
        assert_eq!(report.steps(), ["Step one", "Step two", "Step three"]);
    }

    #[test]
    fn test_empty_text() {
        let report = parser().parse("");
        assert_eq!(report.title(), "");
        assert_eq!(report.description(), "");
        assert!(report.steps().is_empty());
        assert!(report.environment().is_empty());
    }

    #[test]
    fn test_parse_assigns_fresh_ids() {
        let parser = parser();
        let a = parser.parse(MARKDOWN_REPORT);
        let b = parser.parse(MARKDOWN_REPORT);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_issue_uses_number() {
        let payload = IssuePayload::from_json(r#"{"number": 42, "title": "Bug title", "body": ""}"#)
            .unwrap();
        let report = parser().parse_external_issue(&payload);
        assert_eq!(report.id().as_str(), "gh-42");
        assert_eq!(report.title(), "Bug title");
    }

    #[test]
    fn test_issue_falls_back_to_id_then_token() {
        let parser = parser();
        let by_id = IssuePayload::from_json(r#"{"id": 99, "title": "T", "body": ""}"#).unwrap();
        assert_eq!(parser.parse_external_issue(&by_id).id().as_str(), "gh-99");

        let anonymous = IssuePayload::from_json(r#"{"title": "T"}"#).unwrap();
        assert_eq!(parser.parse_external_issue(&anonymous).id().as_str(), "gh-bug-1");
    }

    #[test]
    fn test_issue_title_falls_back_to_body() {
        let payload = IssuePayload {
            number: None,
            id: None,
            title: Some("   ".to_string()),
            body: Some("## Title\nFrom body\n## Steps to Reproduce\n1. Do this\n2. Do that\n".to_string()),
        };
        let report = parser().parse_external_issue(&payload);
        assert_eq!(report.title(), "From body");
        assert_eq!(report.steps(), ["Do this", "Do that"]);
    }

    #[test]
    fn test_issue_custom_prefix() {
        let config = ParserConfig {
            issue_id_prefix: "jira-".to_string(),
            ..ParserConfig::default()
        };
        let parser = BugParser::with_id_generator(config, SequentialIdGenerator::new("x")).unwrap();
        let payload = IssuePayload::from_json(r#"{"number": "PROJ-7"}"#).unwrap();
        assert_eq!(parser.parse_external_issue(&payload).id().as_str(), "jira-PROJ-7");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ParserConfig {
            description_line_limit: 0,
            ..ParserConfig::default()
        };
        assert!(matches!(BugParser::new(config), Err(ExtractorError::Config(_))));
    }
}
