//! CLI entry point: stdin -> filtered report on stdout, exit 0 or 2.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tsc_prune::report::{filter_report, Outcome};
use tsc_prune::{config, PathFilter};

/// Filters tsc --pretty output through tsconfig exclude globs.
///
/// Pipe the compiler into it: `tsc --pretty | tsc-prune`. Diagnostic blocks
/// for excluded paths are removed and the trailing error summary is
/// rewritten to match. Exits 0 when nothing remains, 2 otherwise.
#[derive(Debug, Parser)]
#[command(name = "tsc-prune", version)]
struct Cli {
    /// Path to a tsconfig.json (defaults to the nearest ancestor of the
    /// current directory)
    #[arg(short, long, value_name = "FILE")]
    project: Option<PathBuf>,

    /// Additional glob pattern to exclude (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    if input.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let mut patterns = config::resolve_excludes(cli.project.as_deref())?;
    patterns.extend(cli.exclude);
    let filter = PathFilter::new(&patterns);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = filter_report(&input, &filter, &mut out)?;
    out.flush()?;

    match outcome {
        Outcome::Clean => Ok(ExitCode::SUCCESS),
        Outcome::DiagnosticsRemain => Ok(ExitCode::from(2)),
    }
}
