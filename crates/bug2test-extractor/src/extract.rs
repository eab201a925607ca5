//! Fragment extractors: steps, environment entries and identifiers

use crate::patterns::PatternLibrary;
use std::collections::BTreeMap;

/// Identifier returned when sanitizing leaves nothing behind
pub const FALLBACK_IDENTIFIER: &str = "bug";

/// Maximum length of a sanitized identifier
pub const MAX_IDENTIFIER_LEN: usize = 60;

/// Extract ordered/unordered list items from a section of text
///
/// Each list item starts a new step. A non-empty line that is not a list
/// item continues the most recent step. Text before the first list item is
/// ignored.
pub fn extract_steps(patterns: &PatternLibrary, fragment: &str) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();
    for line in fragment.lines() {
        if let Some(item) = patterns.list_item(line) {
            steps.push(item.trim().to_string());
        } else if let Some(last) = steps.last_mut() {
            let continuation = line.trim();
            if !continuation.is_empty() {
                last.push(' ');
                last.push_str(continuation);
            }
        }
    }
    steps
}

/// Extract key-value environment pairs from a section of text
///
/// Keys are lower-cased with spaces replaced by underscores; a repeated key
/// keeps its last value.
pub fn extract_environment(patterns: &PatternLibrary, fragment: &str) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    for line in fragment.lines() {
        if let Some((key, value)) = patterns.key_value(line.trim()) {
            let key = key.trim().to_lowercase().replace(' ', "_");
            env.insert(key, value.trim().to_string());
        }
    }
    env
}

/// Convert free text into a lower-case identifier usable as a test name
///
/// Runs of characters outside `[a-z0-9]` collapse into one underscore,
/// leading and trailing underscores are dropped, and the result is cut to
/// [`MAX_IDENTIFIER_LEN`] characters.
///
/// ```
/// use bug2test_extractor::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("AttributeError on empty input"), "attributeerror_on_empty_input");
/// assert_eq!(sanitize_identifier("!!!"), "bug");
/// ```
pub fn sanitize_identifier(text: &str) -> String {
    let mut identifier = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !identifier.is_empty() {
                identifier.push('_');
            }
            pending_separator = false;
            identifier.push(c);
        } else {
            pending_separator = true;
        }
    }
    identifier.truncate(MAX_IDENTIFIER_LEN);
    if identifier.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        identifier
    }
}
