//! Declared-parameter annotation parsing.
//!
//! Turns the raw text between a signature's parentheses into a
//! name→declared-type map. The split on `,` is a simple top-level split and
//! does not account for commas inside bracketed generic types; that matches
//! the grammar this tool was defined against.

use crate::error::{HintcheckError, HintcheckResult};
use crate::record::TypeMap;
use regex::Regex;
use std::sync::OnceLock;

/// Leading identifier-like token of an annotation: letters, digits,
/// underscore, pipe, and brackets. Stops before any `=default` assignment.
fn type_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\w|\[\]]+").expect("Hardcoded regex pattern is valid"))
}

/// Parses `raw_params` into a [`TypeMap`] of declared annotations.
///
/// Variadic and keyword-catch-all parameters (`*args`, `**kwargs`) are
/// excluded from the result. Any remaining parameter without a `name: type`
/// separator fails the whole check with
/// [`HintcheckError::MissingTypeHint`]; no partial map is returned.
pub fn parse_annotations(function: &str, raw_params: &str) -> HintcheckResult<TypeMap> {
    let stripped: String = raw_params.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Ok(TypeMap::new());
    }

    let mut declared = TypeMap::new();
    for param in stripped.split(',') {
        if param.contains('*') {
            continue;
        }
        let Some((name, annotation)) = param.split_once(':') else {
            return Err(HintcheckError::missing_type_hint(function, raw_params.trim()));
        };
        // An unusable annotation (e.g. `a:`) records an empty type, which
        // downstream comparison will flag against any documented type.
        let ty = type_token_regex()
            .find(annotation)
            .map(|m| m.as_str())
            .unwrap_or_default();
        declared.insert(name, ty);
    }
    Ok(declared)
}
