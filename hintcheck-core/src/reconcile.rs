//! Cross-validation of declared annotations against documented arguments.

use crate::error::{HintcheckError, HintcheckResult};
use crate::record::TypeMap;

/// Reconciles one function's declared annotations with its documented
/// arguments.
///
/// Rules, in order; the first failure is returned:
///
/// 1. Multi-line docstrings must document exactly as many arguments as are
///    declared (variadic parameters already excluded on both sides).
/// 2. Every declared parameter must appear in the docstring with an exactly
///    equal (whitespace-trimmed) type string. A single-line docstring is
///    exempt from documenting anything.
///
/// An argument documented but never declared is only caught through the
/// count check in rule 1: it has no dedicated error kind, and a single-line
/// docstring never triggers it.
pub fn reconcile(
    function: &str,
    declared: &TypeMap,
    documented: &TypeMap,
    single_line: bool,
) -> HintcheckResult<()> {
    if !single_line && declared.len() != documented.len() {
        return Err(HintcheckError::count_mismatch(
            function,
            declared.len(),
            documented.len(),
        ));
    }

    for (name, declared_type) in declared.iter() {
        match documented.get(name) {
            None if single_line => continue,
            None => return Err(HintcheckError::undocumented(function, name)),
            Some(documented_type) if documented_type != declared_type => {
                return Err(HintcheckError::type_mismatch(
                    function,
                    name,
                    declared_type,
                    documented_type,
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> TypeMap {
        entries
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_matching_maps_pass() {
        let declared = map(&[("a", "int"), ("b", "str")]);
        let documented = map(&[("a", "int"), ("b", "str")]);
        assert!(reconcile("f", &declared, &documented, false).is_ok());
    }

    #[test]
    fn test_both_empty_pass() {
        assert!(reconcile("f", &TypeMap::new(), &TypeMap::new(), false).is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let declared = map(&[("a", "int"), ("b", "float")]);
        let documented = map(&[("a", "int")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        assert!(matches!(
            err,
            HintcheckError::ArgumentCountMismatch {
                declared: 2,
                documented: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_extra_documented_argument_caught_by_count() {
        // No dedicated error kind for this case.
        let declared = map(&[("a", "int")]);
        let documented = map(&[("a", "int"), ("b", "int")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        assert!(matches!(err, HintcheckError::ArgumentCountMismatch { .. }));
    }

    #[test]
    fn test_undocumented_argument() {
        let declared = map(&[("a", "int")]);
        let documented = map(&[("b", "int")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        match err {
            HintcheckError::UndocumentedArgument { argument, .. } => assert_eq!(argument, "a"),
            other => panic!("Expected UndocumentedArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch() {
        let declared = map(&[("a", "int")]);
        let documented = map(&[("a", "str")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        match err {
            HintcheckError::TypeHintMismatch {
                declared,
                documented,
                ..
            } => {
                assert_eq!(declared, "int");
                assert_eq!(documented, "str");
            }
            other => panic!("Expected TypeHintMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_single_line_tolerates_missing_docs() {
        let declared = map(&[("a", "int"), ("b", "str")]);
        assert!(reconcile("f", &declared, &TypeMap::new(), true).is_ok());
    }

    #[test]
    fn test_single_line_skips_count_check() {
        let declared = map(&[("a", "int"), ("b", "str")]);
        let documented = map(&[("a", "int")]);
        assert!(reconcile("f", &declared, &documented, true).is_ok());
    }

    #[test]
    fn test_single_line_still_flags_type_mismatch() {
        // Arguments that ARE documented must still match.
        let declared = map(&[("a", "int")]);
        let documented = map(&[("a", "str")]);
        let err = reconcile("f", &declared, &documented, true).unwrap_err();
        assert!(matches!(err, HintcheckError::TypeHintMismatch { .. }));
    }

    #[test]
    fn test_empty_documented_type_mismatches() {
        let declared = map(&[("a", "int")]);
        let documented = map(&[("a", "")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        assert!(matches!(err, HintcheckError::TypeHintMismatch { .. }));
    }

    #[test]
    fn test_case_sensitive_comparison() {
        // "List[int]" and "list[int]" are distinct; no semantic compatibility.
        let declared = map(&[("a", "list[int]")]);
        let documented = map(&[("a", "List[int]")]);
        let err = reconcile("f", &declared, &documented, false).unwrap_err();
        assert!(matches!(err, HintcheckError::TypeHintMismatch { .. }));
    }
}
