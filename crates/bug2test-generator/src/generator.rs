//! Conversion of bug reports into generated regression cases

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::template::{render_test_module, SETUP_CODE};
use bug2test_domain::{
    BugReport, Confidence, ConversionOutcome, GeneratedCase, IdGenerator, UuidIdGenerator,
};
use bug2test_extractor::sanitize_identifier;
use tracing::{debug, info};

/// Expected result recorded when a report states none
pub const DEFAULT_EXPECTED_RESULT: &str = "no error";

/// Completeness signals, each worth an equal share of the confidence
///
/// A failed check contributes its note, when it has one.
const COMPLETENESS_CHECKS: &[(fn(&BugReport) -> bool, Option<&str>)] = &[
    (
        |r: &BugReport| !r.steps().is_empty(),
        Some("No steps to reproduce; test body will be a placeholder."),
    ),
    (
        |r: &BugReport| !r.expected_behavior().is_empty(),
        Some("No expected behavior specified."),
    ),
    (
        |r: &BugReport| !r.actual_behavior().is_empty(),
        Some("No actual behavior specified."),
    ),
    (|r: &BugReport| !r.description().is_empty(), None),
];

/// Turns [`BugReport`]s into pytest regression cases
///
/// # Examples
///
/// ```
/// use bug2test_domain::{BugReport, RecordId};
/// use bug2test_generator::CaseGenerator;
///
/// let generator = CaseGenerator::default_config().unwrap();
/// let report = BugReport::new(RecordId::new("BUG-1").unwrap())
///     .with_title("Crash on empty input")
///     .with_actual_behavior("TypeError raised");
///
/// let outcome = generator.convert(&report);
/// assert_eq!(outcome.confidence.value(), 0.25);
/// assert!(outcome.case.has_tag("error-handling"));
/// ```
pub struct CaseGenerator<G = UuidIdGenerator> {
    config: GeneratorConfig,
    ids: G,
}

impl CaseGenerator<UuidIdGenerator> {
    /// Create a generator assigning random case ids
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::with_id_generator(config, UuidIdGenerator::default())
    }

    /// Create a generator with default configuration
    pub fn default_config() -> Result<Self, GeneratorError> {
        Self::new(GeneratorConfig::default())
    }
}

impl<G: IdGenerator> CaseGenerator<G> {
    /// Create a generator drawing case ids from `ids`
    pub fn with_id_generator(config: GeneratorConfig, ids: G) -> Result<Self, GeneratorError> {
        config.validate().map_err(GeneratorError::Config)?;
        Ok(Self { config, ids })
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Convert a report into a generated case with a completeness score
    ///
    /// Never fails: an empty report still yields a placeholder test, scored
    /// at zero confidence.
    pub fn convert(&self, report: &BugReport) -> ConversionOutcome {
        let mut present = 0;
        let mut notes = Vec::new();
        for (check, note) in COMPLETENESS_CHECKS {
            if check(report) {
                present += 1;
            } else if let Some(note) = note {
                notes.push(note.to_string());
            }
        }
        let confidence = Confidence::from_signals(present, COMPLETENESS_CHECKS.len());

        let name_source = if report.title().is_empty() {
            report.id().as_str()
        } else {
            report.title()
        };
        let test_name = sanitize_identifier(name_source);
        debug!("Rendering test_{} for report '{}'", test_name, report.id());

        let expected_result = match report.expected_behavior() {
            "" => DEFAULT_EXPECTED_RESULT,
            expected => expected,
        };

        let case = GeneratedCase::new(self.ids.next_id(), report.id().clone())
            .with_setup_code(SETUP_CODE)
            .with_test_code(render_test_module(report, &test_name))
            .with_expected_result(expected_result)
            .with_tags(self.derive_tags(report.actual_behavior()));

        info!(
            "Converted report '{}' into case '{}' (confidence: {})",
            report.id(),
            case.id(),
            confidence
        );
        ConversionOutcome::new(report.clone(), case, confidence, notes)
    }

    /// Base tag, plus error and exception tags when the actual behavior
    /// mentions them
    fn derive_tags(&self, actual: &str) -> Vec<String> {
        let actual = actual.to_lowercase();
        let mut tags = vec![self.config.base_tag.clone()];
        if actual.contains("error") {
            tags.push(self.config.error_tag.clone());
        }
        if actual.contains("exception") {
            tags.push(self.config.exception_tag.clone());
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bug2test_domain::{RecordId, SequentialIdGenerator};

    fn generator() -> CaseGenerator<SequentialIdGenerator> {
        CaseGenerator::with_id_generator(
            GeneratorConfig::default(),
            SequentialIdGenerator::new("case-"),
        )
        .unwrap()
    }

    fn empty_report() -> BugReport {
        BugReport::new(RecordId::new("BUG-001").unwrap())
    }

    fn full_report() -> BugReport {
        empty_report()
            .with_title("Login fails")
            .with_description("Users cannot log in")
            .with_steps(["Open login page", "Submit"])
            .with_expected_behavior("Dashboard shown")
            .with_actual_behavior("Blank page")
    }

    #[test]
    fn test_full_report_has_full_confidence() {
        let outcome = generator().convert(&full_report());
        assert_eq!(outcome.confidence.value(), 1.0);
        assert!(outcome.notes.is_empty());
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_empty_report_has_zero_confidence() {
        let outcome = generator().convert(&empty_report());
        assert_eq!(outcome.confidence.value(), 0.0);
        assert_eq!(
            outcome.notes,
            [
                "No steps to reproduce; test body will be a placeholder.",
                "No expected behavior specified.",
                "No actual behavior specified.",
            ]
        );
    }

    #[test]
    fn test_steps_and_expected_give_half_confidence() {
        let report = empty_report()
            .with_steps(["one"])
            .with_expected_behavior("works");
        let outcome = generator().convert(&report);
        assert_eq!(outcome.confidence.value(), 0.5);
        assert_eq!(outcome.notes, ["No actual behavior specified."]);
    }

    #[test]
    fn test_missing_description_adds_no_note() {
        let report = full_report().with_description("");
        let outcome = generator().convert(&report);
        assert_eq!(outcome.confidence.value(), 0.75);
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_case_fields() {
        let outcome = generator().convert(&full_report());
        let case = &outcome.case;

        assert_eq!(case.id().as_str(), "case-1");
        assert_eq!(case.source_id().as_str(), "BUG-001");
        assert_eq!(case.setup_code(), SETUP_CODE);
        assert_eq!(case.expected_result(), "Dashboard shown");
        assert!(case.test_code().contains("def test_login_fails() -> None:"));
        assert_eq!(outcome.report, full_report());
    }

    #[test]
    fn test_expected_result_fallback() {
        let outcome = generator().convert(&empty_report());
        assert_eq!(outcome.case.expected_result(), DEFAULT_EXPECTED_RESULT);
    }

    #[test]
    fn test_name_falls_back_to_report_id() {
        let outcome = generator().convert(&empty_report());
        assert!(outcome.case.test_code().contains("def test_bug_001() -> None:"));
    }

    #[test]
    fn test_tags_error() {
        let report = empty_report().with_actual_behavior("Raises ValueError");
        let outcome = generator().convert(&report);
        assert_eq!(outcome.case.tags(), ["regression", "error-handling"]);
    }

    #[test]
    fn test_tags_exception() {
        let report = empty_report().with_actual_behavior("An EXCEPTION bubbles up");
        let outcome = generator().convert(&report);
        assert_eq!(outcome.case.tags(), ["regression", "exception"]);
    }

    #[test]
    fn test_tags_error_and_exception() {
        let report = empty_report().with_actual_behavior("Error: unhandled exception");
        let outcome = generator().convert(&report);
        assert_eq!(outcome.case.tags().len(), 3);
        assert!(outcome.case.has_tag("regression"));
        assert!(outcome.case.has_tag("error-handling"));
        assert!(outcome.case.has_tag("exception"));
    }

    #[test]
    fn test_tags_plain() {
        let outcome = generator().convert(&full_report());
        assert_eq!(outcome.case.tags(), ["regression"]);
    }

    #[test]
    fn test_custom_tags_from_config() {
        let config = GeneratorConfig {
            base_tag: "bugfix".to_string(),
            ..GeneratorConfig::default()
        };
        let generator =
            CaseGenerator::with_id_generator(config, SequentialIdGenerator::new("c")).unwrap();
        let outcome = generator.convert(&empty_report());
        assert_eq!(outcome.case.tags(), ["bugfix"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            base_tag: String::new(),
            ..GeneratorConfig::default()
        };
        let result = CaseGenerator::new(config);
        assert!(matches!(result, Err(GeneratorError::Config(_))));
    }

    #[test]
    fn test_each_conversion_gets_fresh_case_id() {
        let generator = generator();
        let a = generator.convert(&full_report());
        let b = generator.convert(&full_report());
        assert_ne!(a.case.id(), b.case.id());
        assert_eq!(a.case.source_id(), b.case.source_id());
    }
}
