//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::commands::parse::{read_report, write_output};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bug2test_extractor::BugParser;
use bug2test_generator::{CaseGenerator, CaseSuite};
use std::io::Write;

/// Execute the convert command.
pub fn execute_convert<W: Write>(
    args: ConvertArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let parser = BugParser::new(config.parser.clone())?;
    let generator = CaseGenerator::new(config.generator.clone())?;
    let output_dir = args
        .output
        .unwrap_or_else(|| config.settings.default_output_dir.clone());

    let report = read_report(&parser, &args.input, args.issue)?;
    let outcome = generator.convert(&report);

    let mut suite = CaseSuite::with_config(config.generator.clone())?;
    suite.add(outcome.case.clone());
    let summary = suite.export(&output_dir)?;

    writeln!(
        out,
        "{}",
        formatter.success(&format!(
            "Case '{}' written to {}/ (confidence: {})",
            outcome.case.id(),
            output_dir.display(),
            outcome.confidence
        ))
    )?;
    writeln!(out, "{}", formatter.info(&summary.marker_line()))?;

    if !outcome.notes.is_empty() {
        writeln!(out, "Notes:")?;
        for note in &outcome.notes {
            writeln!(out, "{}", formatter.note(note))?;
        }
    }

    if let Some(path) = args.json_output {
        write_output(&path, &formatter.outcome_json(&outcome)?)?;
        writeln!(
            out,
            "{}",
            formatter.info(&format!("Full conversion outcome written to {}", path.display()))
        )?;
    }

    Ok(())
}
