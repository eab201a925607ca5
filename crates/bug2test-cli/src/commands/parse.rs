//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use bug2test_domain::{BugReport, IdGenerator};
use bug2test_extractor::{BugParser, IssuePayload};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read a text file, keeping its path in any error.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CliError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })
}

/// Write a text file, keeping its path in any error.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        CliError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })
}

/// Read and parse one report file.
///
/// With `issue` set the file is decoded as a JSON issue payload.
pub fn read_report<G: IdGenerator>(
    parser: &BugParser<G>,
    path: &Path,
    issue: bool,
) -> Result<BugReport> {
    let text = read_input(path)?;
    if issue {
        let payload = IssuePayload::from_json(&text)?;
        Ok(parser.parse_external_issue(&payload))
    } else {
        Ok(parser.parse(&text))
    }
}

/// Execute the parse command.
pub fn execute_parse<W: Write>(
    args: ParseArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let parser = BugParser::new(config.parser.clone())?;
    let report = read_report(&parser, &args.input, args.issue)?;
    let json = formatter.report_json(&report)?;

    match args.output {
        Some(path) => {
            write_output(&path, &json)?;
            writeln!(
                out,
                "{}",
                formatter.success(&format!("Parsed bug report written to {}", path.display()))
            )?;
        }
        None => writeln!(out, "{}", json)?,
    }

    Ok(())
}
