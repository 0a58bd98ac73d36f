//! Success-report formatting - plaintext and JSON.
//!
//! Failure diagnostics never go through here: errors are printed to stderr
//! by the CLI. These reports only summarize a fully passing run, on stdout.

use crate::check::FileReport;
use serde_json::json;

/// Prints the per-file summary in plain text format.
pub fn print_plain(reports: &[FileReport]) {
    let total: usize = reports.iter().map(|r| r.functions.len()).sum();
    for report in reports {
        println!(
            "{}: {} function(s) checked",
            report.path.display(),
            report.functions.len()
        );
    }
    println!("OK: {} function(s) across {} file(s)", total, reports.len());
}

/// Prints the per-file summary in JSON format.
///
/// Falls back to a plain line if serialization fails (should never happen
/// for these structures, but the failure path still prints something).
pub fn print_json(reports: &[FileReport]) {
    match serde_json::to_string_pretty(&json!({ "files": reports })) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"files\": {}}}", reports.len());
        }
    }
}
