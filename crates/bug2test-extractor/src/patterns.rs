//! Pattern library: the fixed rule tables that recognise report structure
//!
//! The rules are plain data. [`PatternLibrary::compile`] turns them into
//! regular expressions once, and the scanners below evaluate whole tables
//! generically, so adding a section is a one-line change to a table.

use crate::error::ExtractorError;
use regex::Regex;
use std::fmt;

/// A named region of a bug report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Report title
    Title,
    /// Free-form description
    Description,
    /// Steps to reproduce
    Steps,
    /// Expected behavior
    Expected,
    /// Actual (buggy) behavior
    Actual,
    /// Environment key/value list
    Environment,
}

impl Section {
    /// Section name as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Description => "description",
            Section::Steps => "steps",
            Section::Expected => "expected",
            Section::Actual => "actual",
            Section::Environment => "environment",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markdown headings introducing a section, one rule per section.
///
/// Leading indentation is limited to spaces and tabs so a hit always starts
/// on the heading line itself.
const HEADING_RULES: &[(Section, &str)] = &[
    (Section::Title, r"(?mi)^[ \t]*#+[ \t]*title"),
    (Section::Description, r"(?mi)^[ \t]*#+[ \t]*description"),
    (
        Section::Steps,
        r"(?mi)^[ \t]*#+[ \t]*(?:steps[ \t]+to[ \t]+reproduce|reproduction[ \t]+steps?|how[ \t]+to[ \t]+reproduce)",
    ),
    (
        Section::Expected,
        r"(?mi)^[ \t]*#+[ \t]*expected[ \t]+(?:behavior|result|outcome)",
    ),
    (
        Section::Actual,
        r"(?mi)^[ \t]*#+[ \t]*actual[ \t]+(?:behavior|result|outcome)",
    ),
    (Section::Environment, r"(?mi)^[ \t]*#+[ \t]*environment"),
];

/// Single-line `Label: value` forms. Earlier rules win when a line could
/// match several.
const INLINE_RULES: &[(Section, &str)] = &[
    (Section::Title, r"(?i)^(?:title|summary)\s*:\s*(.+)"),
    (Section::Description, r"(?i)^description\s*:\s*(.+)"),
    (Section::Expected, r"(?i)^expected\s*:\s*(.+)"),
    (Section::Actual, r"(?i)^actual\s*:\s*(.+)"),
];

/// `1. step`, `2) step`, `- step`, `* step`
const LIST_ITEM_RULE: &str = r"^\s*(?:\d+[.)]\s+|[-*]\s+)(.+)";

/// `[- ]Key name: value` or `Key - value`
const KEY_VALUE_RULE: &str = r"^[-*]?\s*(\w[\w\s/]+?)\s*[:\-]\s*(.+)";

/// A heading match: where it starts and which section it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHit {
    /// Byte offset of the start of the heading line
    pub offset: usize,
    /// Section introduced by the heading
    pub section: Section,
}

/// Compiled rule tables
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    headings: Vec<(Section, Regex)>,
    inline: Vec<(Section, Regex)>,
    list_item: Regex,
    key_value: Regex,
}

impl PatternLibrary {
    /// Compile the built-in rule tables
    pub fn compile() -> Result<Self, ExtractorError> {
        Ok(Self {
            headings: compile_table(HEADING_RULES)?,
            inline: compile_table(INLINE_RULES)?,
            list_item: Regex::new(LIST_ITEM_RULE)?,
            key_value: Regex::new(KEY_VALUE_RULE)?,
        })
    }

    /// All heading hits in `text`, ordered by offset
    ///
    /// Every rule scans the whole document. Hits at the same offset keep
    /// rule-table order.
    pub fn heading_hits(&self, text: &str) -> Vec<SectionHit> {
        let mut hits: Vec<SectionHit> = self
            .headings
            .iter()
            .flat_map(|(section, re)| {
                re.find_iter(text).map(move |m| SectionHit {
                    offset: m.start(),
                    section: *section,
                })
            })
            .collect();
        hits.sort_by_key(|hit| hit.offset);
        hits
    }

    /// First inline rule matching `line`, with its captured value
    pub fn match_inline<'t>(&self, line: &'t str) -> Option<(Section, &'t str)> {
        self.inline.iter().find_map(|(section, re)| {
            re.captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| (*section, m.as_str()))
        })
    }

    /// Content of a list item line, if `line` is one
    pub fn list_item<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.list_item
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Raw `(key, value)` of a key/value line, if `line` is one
    pub fn key_value<'t>(&self, line: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.key_value.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

fn compile_table(rules: &[(Section, &str)]) -> Result<Vec<(Section, Regex)>, ExtractorError> {
    rules
        .iter()
        .map(|(section, pattern)| {
            Regex::new(pattern)
                .map(|re| (*section, re))
                .map_err(|e| ExtractorError::Pattern(format!("{} rule: {}", section, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib() -> PatternLibrary {
        PatternLibrary::compile().unwrap()
    }

    #[test]
    fn test_every_section_has_a_heading_rule() {
        let sections: Vec<Section> = HEADING_RULES.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            sections,
            vec![
                Section::Title,
                Section::Description,
                Section::Steps,
                Section::Expected,
                Section::Actual,
                Section::Environment,
            ]
        );
    }

    #[test]
    fn test_heading_hits_are_sorted() {
        let text = "## Expected Behavior\nok\n## Title\nT\n### steps to reproduce\n1. a\n";
        let hits = lib().heading_hits(text);
        let sections: Vec<Section> = hits.iter().map(|h| h.section).collect();
        assert_eq!(sections, vec![Section::Expected, Section::Title, Section::Steps]);
        assert_eq!(hits[0].offset, 0);
        assert!(hits.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn test_heading_variants() {
        let lib = lib();
        for heading in [
            "# Reproduction Step",
            "## Reproduction steps",
            "## How to reproduce",
            "  ## STEPS TO REPRODUCE",
        ] {
            let hits = lib.heading_hits(heading);
            assert_eq!(hits.len(), 1, "{heading}");
            assert_eq!(hits[0].section, Section::Steps);
        }
        for heading in ["## Actual Result", "## actual outcome", "##Actual behavior"] {
            assert_eq!(lib.heading_hits(heading)[0].section, Section::Actual);
        }
    }

    #[test]
    fn test_heading_requires_hash_marker() {
        assert!(lib().heading_hits("Title\nDescription\n").is_empty());
        assert!(lib().heading_hits("# Bug Report\n").is_empty());
    }

    #[test]
    fn test_heading_offset_is_heading_line_after_blank_lines() {
        let text = "\n\n## Title\nT\n";
        let hits = lib().heading_hits(text);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].offset, 2);
    }

    #[test]
    fn test_inline_rules() {
        let lib = lib();
        assert_eq!(
            lib.match_inline("Summary: Crash on save"),
            Some((Section::Title, "Crash on save"))
        );
        assert_eq!(
            lib.match_inline("expected : works"),
            Some((Section::Expected, "works"))
        );
        assert_eq!(lib.match_inline("Actual:boom"), Some((Section::Actual, "boom")));
        assert_eq!(lib.match_inline("  Title: indented"), None);
        assert_eq!(lib.match_inline("Title:"), None);
    }

    #[test]
    fn test_list_item_rule() {
        let lib = lib();
        assert_eq!(lib.list_item("1. Open the app"), Some("Open the app"));
        assert_eq!(lib.list_item("  12) Click save"), Some("Click save"));
        assert_eq!(lib.list_item("- bullet"), Some("bullet"));
        assert_eq!(lib.list_item("* star"), Some("star"));
        assert_eq!(lib.list_item("1.no space"), None);
        assert_eq!(lib.list_item("plain text"), None);
    }

    #[test]
    fn test_key_value_rule() {
        let lib = lib();
        assert_eq!(lib.key_value("- Python: 3.11"), Some(("Python", "3.11")));
        assert_eq!(
            lib.key_value("Package version: 1.2.3"),
            Some(("Package version", "1.2.3"))
        );
        assert_eq!(lib.key_value("OS/Arch - linux/amd64"), Some(("OS/Arch", "linux/amd64")));
        assert_eq!(lib.key_value("no separator here"), None);
    }
}
