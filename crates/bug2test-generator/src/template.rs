//! Rendering of pytest regression modules
//!
//! Plain string interpolation into a fixed layout. Every piece of report
//! text is escaped for the context it lands in so the generated module
//! always parses.

use bug2test_domain::BugReport;

/// Import preamble placed before every generated test module
pub const SETUP_CODE: &str = "import pytest\n\
# Add your module imports here, e.g.:\n\
# from mypackage.module import function_under_test\n";

/// Phrase used in place of an empty expected or actual behavior
pub const SEE_DESCRIPTION: &str = "see description";

/// Escape text for use inside a triple-quoted Python docstring
pub fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape text for use inside a single-line Python string literal
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Collapse line breaks so text fits on one comment line
fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_see_description(text: &str) -> &str {
    if text.is_empty() {
        SEE_DESCRIPTION
    } else {
        text
    }
}

/// Commented, 1-indexed step list, or a placeholder when there are none
pub fn render_steps(steps: &[String]) -> String {
    if steps.is_empty() {
        return "    # No steps provided.".to_string();
    }
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("    # {}. {}", idx + 1, single_line(step)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full test module for `report` with `test_name` as the
/// function suffix
///
/// The function body never passes: it raises `NotImplementedError` until a
/// developer replaces it with a real reproduction.
pub fn render_test_module(report: &BugReport, test_name: &str) -> String {
    let id = escape_docstring(report.id().as_str());
    let title = escape_docstring(report.title());
    let expected_doc = escape_docstring(or_see_description(report.expected_behavior()));
    let actual_doc = escape_docstring(or_see_description(report.actual_behavior()));
    let expected_literal = escape_string_literal(or_see_description(report.expected_behavior()));

    format!(
        r#""""Regression test generated from bug: {id} - {title}"""
import pytest


def test_{test_name}() -> None:
    """Regression for: {title}

    Original bug: {id}
    Expected: {expected_doc}
    Actual (buggy): {actual_doc}
    """
    # Steps to reproduce:
{steps}
    # Replace the line below with a call into the code under test.
    # The message records the behavior a fixed build should show.
    raise NotImplementedError(
        "Implement this test: reproduce the bug, then assert the fix."
        "\nExpected: {expected_literal}"
    )
"#,
        steps = render_steps(report.steps()),
    )
}
