//! Docstring argument-list parsing.
//!
//! Parses the one structured docstring convention this tool understands: an
//! `Args:` section whose entries look like `name (type): description`.
//! Continuation lines of multi-line descriptions do not match the entry
//! pattern and are silently ignored, so each argument only needs its primary
//! line to match once.

use crate::record::TypeMap;
use regex::Regex;
use std::sync::OnceLock;

/// `Args:` section, up to the next blank line or end of text.
fn args_section_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)Args:(.*?)(?:\n\n|\z)").expect("Hardcoded regex pattern is valid")
    })
}

/// One argument entry: `name (type): description`. The type token may be
/// empty (`name ():`), which records an empty-string type.
fn arg_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z0-9_]+) \(([^)]*)\)\s*:\s*([^\n\r]+)")
            .expect("Hardcoded regex pattern is valid")
    })
}

/// Parses the documented arguments out of a raw docstring body.
///
/// Returns an empty map when no `Args:` section is present; whether that is
/// acceptable is the reconciler's decision, not a parse error.
pub fn parse_docstring_args(docstring: &str) -> TypeMap {
    let Some(caps) = args_section_regex().captures(docstring) else {
        return TypeMap::new();
    };

    let mut documented = TypeMap::new();
    for line in caps[1].trim().lines() {
        if let Some(entry) = arg_line_regex().captures(line) {
            documented.insert(&entry[1], entry[2].trim());
        }
    }
    documented
}

/// A single-line docstring contains no line break at all. Documented
/// arguments are not required for one, even if the function has parameters.
pub fn is_single_line(docstring: &str) -> bool {
    !docstring.contains('\n') && !docstring.contains('\r')
}
