//! File driver: runs the full pipeline over one source file.
//!
//! Files are processed strictly sequentially by the caller; within a file,
//! functions are checked in source order. The first failure anywhere is
//! returned immediately (fail-fast for the entire invocation) and no partial
//! report is produced.

use crate::annotations::parse_annotations;
use crate::docstring::{is_single_line, parse_docstring_args};
use crate::error::{HintcheckError, HintcheckResult};
use crate::extract::extract_functions;
use crate::reconcile::reconcile;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recognized source-file extension.
pub const SOURCE_EXTENSION: &str = "py";

/// Outcome of a successful file check: the functions that passed, in source
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the checked file.
    pub path: PathBuf,
    /// Names of the functions that were checked.
    pub functions: Vec<String>,
}

/// Checks whether a function name matches any ignore pattern
/// (exact, suffix, or substring).
pub fn is_ignored(function: &str, ignore: &[String]) -> bool {
    ignore
        .iter()
        .any(|p| p == function || function.ends_with(p) || function.contains(p))
}

/// Runs the pipeline over in-memory source text.
///
/// `path` is only used for report and error context; no I/O happens here.
pub fn check_source(path: &Path, source: &str, ignore: &[String]) -> HintcheckResult<FileReport> {
    let mut report = FileReport {
        path: path.to_path_buf(),
        functions: Vec::new(),
    };

    for record in extract_functions(source) {
        if is_ignored(&record.name, ignore) {
            debug!(function = %record.name, "ignored by pattern");
            continue;
        }
        debug!(function = %record.name, file = %path.display(), "checking docstring");

        if record.raw_docstring.is_empty() {
            return Err(HintcheckError::missing_docstring(&record.name));
        }

        let declared = parse_annotations(&record.name, &record.raw_params)?;
        let documented = parse_docstring_args(&record.raw_docstring);
        reconcile(
            &record.name,
            &declared,
            &documented,
            is_single_line(&record.raw_docstring),
        )?;

        report.functions.push(record.name);
    }

    Ok(report)
}

/// Reads `path` and checks every documented function in it.
///
/// Fails with [`HintcheckError::FileNotFound`] when the file cannot be read
/// and [`HintcheckError::UnsupportedFileType`] when the extension is not
/// `.py`.
pub fn check_file(path: &Path, ignore: &[String]) -> HintcheckResult<FileReport> {
    let source =
        fs::read_to_string(path).map_err(|e| HintcheckError::file_not_found(path, e))?;

    if !path
        .extension()
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
    {
        return Err(HintcheckError::unsupported_file_type(path));
    }

    check_source(path, &source, ignore)
}
