//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bug2test - Turn bug reports into pytest regression test stubs.
#[derive(Debug, Parser)]
#[command(name = "bug2test")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BUG2TEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a bug report file and print structured JSON
    Parse(ParseArgs),

    /// Convert a bug report into a pytest regression case
    Convert(ConvertArgs),

    /// Convert every matching bug report in a directory
    Batch(BatchArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Bug report file (Markdown or plain text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the JSON here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat the input as a JSON issue payload
    #[arg(long)]
    pub issue: bool,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Bug report file (Markdown or plain text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for generated pytest files [default: benchmark]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the full conversion outcome as JSON
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Treat the input as a JSON issue payload
    #[arg(long)]
    pub issue: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory containing bug report files
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output directory for generated pytest files [default: benchmark]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob pattern for report file names [default: *.md]
    #[arg(short, long)]
    pub pattern: Option<String>,
}
