//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::commands::parse::read_report;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{BatchRow, Formatter};
use bug2test_extractor::BugParser;
use bug2test_generator::{CaseGenerator, CaseSuite};
use regex::Regex;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Translate a file-name glob into an anchored regex.
///
/// Supports `*`, `?` and bracket classes (`[abc]`, `[a-z]`, `[!abc]`). An
/// unclosed `[` matches itself.
pub fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            '[' => match bracket_class(&chars[i + 1..]) {
                Some((class, consumed)) => {
                    re.push_str(&class);
                    i += consumed;
                }
                None => re.push_str(r"\["),
            },
            c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }
    re.push('$');

    Regex::new(&re).map_err(|e| CliError::InvalidInput(format!("bad pattern '{}': {}", pattern, e)))
}

/// Regex class for the bracket body starting just after `[`, plus the
/// number of chars consumed including the closing `]`.
fn bracket_class(rest: &[char]) -> Option<(String, usize)> {
    let mut j = 0;
    let mut class = String::from("[");
    if rest.first() == Some(&'!') {
        class.push('^');
        j += 1;
    }
    // A leading `]` is a literal member.
    if rest.get(j) == Some(&']') {
        class.push_str(r"\]");
        j += 1;
    }
    while let Some(&c) = rest.get(j) {
        match c {
            ']' => {
                class.push(']');
                return Some((class, j + 1));
            }
            '\\' | '[' | '^' | '&' | '~' => {
                class.push('\\');
                class.push(c);
            }
            // `--` is set difference in a regex class.
            '-' if rest.get(j + 1) == Some(&'-') || (j > 0 && rest[j - 1] == '-') => {
                class.push_str(r"\-");
            }
            c => class.push(c),
        }
        j += 1;
    }
    None
}

/// Files directly inside `dir` whose names match `pattern`, sorted by path.
pub fn collect_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = glob_to_regex(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        // Follows symlinks; dangling links are skipped.
        if !entry.path().is_file() {
            continue;
        }
        if matcher.is_match(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("{} file(s) in {} match '{}'", files.len(), dir.display(), pattern);
    Ok(files)
}

/// Execute the batch command.
pub fn execute_batch<W: Write>(
    args: BatchArgs,
    config: &Config,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let pattern = args
        .pattern
        .unwrap_or_else(|| config.settings.default_pattern.clone());
    let output_dir = args
        .output
        .unwrap_or_else(|| config.settings.default_output_dir.clone());

    let inputs = collect_inputs(&args.input_dir, &pattern)?;
    if inputs.is_empty() {
        return Err(CliError::NoMatchingFiles {
            pattern,
            dir: args.input_dir,
        });
    }

    let parser = BugParser::new(config.parser.clone())?;
    let generator = CaseGenerator::new(config.generator.clone())?;
    let mut suite = CaseSuite::with_config(config.generator.clone())?;
    let mut rows = Vec::with_capacity(inputs.len());

    for path in &inputs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let report = match read_report(&parser, path, false) {
            Ok(report) => report,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                writeln!(out, "{}", formatter.warning(&format!("Skipped: {} ({})", name, e)))?;
                continue;
            }
        };

        let outcome = generator.convert(&report);
        writeln!(out, "Processed: {} -> confidence {}", name, outcome.confidence)?;
        rows.push(BatchRow {
            file: name,
            report_id: report.id().to_string(),
            case_id: outcome.case.id().to_string(),
            confidence: outcome.confidence,
            tags: outcome.case.tags().to_vec(),
        });
        suite.add(outcome.case);
    }

    let summary = suite.export(&output_dir)?;

    writeln!(out, "{}", formatter.batch_table(&rows))?;
    writeln!(out, "{}", formatter.info(&summary.marker_line()))?;
    writeln!(
        out,
        "\n{}",
        formatter.success(&format!(
            "{} case(s) written to {}/",
            summary.total_written(),
            output_dir.display()
        ))
    )?;

    Ok(())
}
