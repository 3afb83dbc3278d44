//! lastmod - keep a last-modified timestamp log in markdown frontmatter
//!
//! Every `lastmod stamp` records a modification of the given documents,
//! collapsing to one entry per day or throttling by a minimum interval.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use lastmod_core::error::{ExitCode as LastmodExitCode, LastmodError};
use lastmod_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(LastmodExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

/// Handle a clap failure, emitting the JSON envelope when `--format json`
/// appears on the command line
fn reject_arguments(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !wants_json(std::env::args().skip(1)) {
        err.exit();
    }

    let error = LastmodError::UsageError(err.to_string());
    report(&error, OutputFormat::Json, false);
    exit_with(error.exit_code())
}

fn report(error: &LastmodError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

fn exit_with(code: LastmodExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Scan raw arguments for `--format json` or `--format=json`
fn wants_json(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|a| a == "--format=json")
        || args.windows(2).any(|w| w[0] == "--format" && w[1] == "json")
}
