//! Output formatting for the CLI.

use crate::error::Result;
use bug2test_domain::{BugReport, Confidence, ConversionOutcome, GeneratedCase};
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One processed file in a batch run.
#[derive(Debug, Clone)]
pub struct BatchRow {
    /// Input file name
    pub file: String,
    /// Id of the parsed report
    pub report_id: String,
    /// Id of the generated case
    pub case_id: String,
    /// Completeness score
    pub confidence: Confidence,
    /// Case tags
    pub tags: Vec<String>,
}

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render a report as pretty JSON.
    pub fn report_json(&self, report: &BugReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&report_value(report))?)
    }

    /// Render a full conversion outcome as pretty JSON.
    pub fn outcome_json(&self, outcome: &ConversionOutcome) -> Result<String> {
        let value = json!({
            "report": report_value(&outcome.report),
            "case": case_value(&outcome.case),
            "confidence": outcome.confidence.value(),
            "notes": outcome.notes,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format the batch summary as a table.
    pub fn batch_table(&self, rows: &[BatchRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No cases generated.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["File", "Report", "Case", "Confidence", "Tags"]);

        for row in rows {
            builder.push_record([
                row.file.clone(),
                row.report_id.clone(),
                row.case_id.clone(),
                row.confidence.to_string(),
                row.tags.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a conversion note.
    pub fn note(&self, message: &str) -> String {
        self.colorize(&format!("  - {}", message), "yellow")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn report_value(report: &BugReport) -> Value {
    json!({
        "id": report.id().as_str(),
        "title": report.title(),
        "description": report.description(),
        "steps": report.steps(),
        "expected_behavior": report.expected_behavior(),
        "actual_behavior": report.actual_behavior(),
        "environment": report.environment(),
    })
}

fn case_value(case: &GeneratedCase) -> Value {
    json!({
        "id": case.id().as_str(),
        "source_id": case.source_id().as_str(),
        "setup_code": case.setup_code(),
        "test_code": case.test_code(),
        "expected_result": case.expected_result(),
        "tags": case.tags(),
    })
}
