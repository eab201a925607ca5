//! bug2test CLI - Turn bug reports into pytest regression test stubs.

use bug2test_cli::commands;
use bug2test_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> bug2test_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays clean for JSON)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter, &mut out)?,
        Command::Convert(args) => commands::execute_convert(args, &config, &formatter, &mut out)?,
        Command::Batch(args) => commands::execute_batch(args, &config, &formatter, &mut out)?,
    }

    Ok(())
}
