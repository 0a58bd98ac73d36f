//! hintcheck CLI - docstring/type-hint consistency checker for Python files.
//!
//! Intended as a pre-commit-style hook: pass the files to check as
//! arguments, get exit 0 when every documented function is consistent and
//! exit 1 on the first inconsistency found. Files are processed strictly in
//! the given order, functions in source order, fail-fast.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use hintcheck_core::{
    check_file, init_logging, load_config, print_json, print_plain, FileReport, HintcheckConfig,
    HintcheckError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check Python docstrings against parameter type hints")]
pub struct Cli {
    /// Python files to check, processed in order
    files: Vec<String>,

    /// Output the success summary in JSON format
    #[arg(long)]
    json: bool,

    /// Function names or patterns to ignore
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,
}

/// Merges CLI ignore patterns with any patterns from hintcheck.toml.
fn resolved_ignore(cli_ignore: &[String], config: &HintcheckConfig) -> Vec<String> {
    let mut ignore = cli_ignore.to_vec();
    if let Some(extra) = &config.ignore {
        ignore.extend(extra.iter().cloned());
    }
    ignore
}

/// JSON output when --json is passed or the config asks for it.
fn wants_json(cli_json: bool, config: &HintcheckConfig) -> bool {
    cli_json
        || config
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f == "json")
}

fn run(cli: &Cli) -> Result<()> {
    if cli.files.is_empty() {
        return Err(HintcheckError::Usage.into());
    }

    let config = load_config(Path::new("."))?.unwrap_or_default();
    let ignore = resolved_ignore(&cli.ignore, &config);

    let mut reports: Vec<FileReport> = Vec::with_capacity(cli.files.len());
    for file in &cli.files {
        let report = check_file(Path::new(file), &ignore)
            .with_context(|| format!("Check failed for {}", file))?;
        reports.push(report);
    }

    if wants_json(cli.json, &config) {
        print_json(&reports);
    } else {
        print_plain(&reports);
    }
    Ok(())
}

fn main() {
    // Global panic guard - keep hook output readable even on internal bugs.
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] hintcheck internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 2.");
    }));

    // Log to stderr, respects RUST_LOG
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
