//! Conversion outcome module

use crate::{BugReport, Confidence, GeneratedCase};

/// The result of converting one bug report into a generated case
///
/// Owns copies of both the report and the case, plus the completeness score
/// and human-readable notes explaining each deduction.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    /// The report the case was generated from
    pub report: BugReport,

    /// The generated case
    pub case: GeneratedCase,

    /// Completeness score of the report
    pub confidence: Confidence,

    /// Explanations for missing completeness signals, in check order
    pub notes: Vec<String>,
}

impl ConversionOutcome {
    /// Create a new outcome
    pub fn new(
        report: BugReport,
        case: GeneratedCase,
        confidence: Confidence,
        notes: Vec<String>,
    ) -> Self {
        Self {
            report,
            case,
            confidence,
            notes,
        }
    }

    /// Whether every completeness signal was present
    pub fn is_complete(&self) -> bool {
        self.confidence == Confidence::FULL
    }
}
