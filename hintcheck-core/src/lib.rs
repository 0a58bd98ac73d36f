//! hintcheck-core: docstring/type-hint consistency checking for Python sources.
//!
//! Verifies that the parameter type annotations declared in a function
//! signature agree with the types documented in the `Args:` section of its
//! docstring. Built as a fail-fast pre-commit check: the first inconsistency
//! found anywhere ends the run.
//!
//! This is not a Python parser. Signatures and docstrings are matched with a
//! permissive line-oriented grammar (no AST, no nested-parenthesis handling,
//! one docstring convention), and those limitations are localized behind the
//! structured records in [`record`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hintcheck_core::prelude::*;
//!
//! for path in paths {
//!     let report = check_file(path, &[])?;
//!     println!("{}: {} function(s) ok", path.display(), report.functions.len());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`extract`]: Function signature and docstring extraction
//! - [`annotations`]: Declared parameter annotation parsing
//! - [`docstring`]: Docstring `Args:` section parsing
//! - [`reconcile`]: Declared/documented cross-validation
//! - [`check`]: Per-file driver
//! - [`record`]: Structured records shared by the stages
//! - [`config`]: hintcheck.toml loading
//! - [`report`]: Success-report formatting
//! - [`error`]: Typed error handling

pub mod annotations;
pub mod check;
pub mod config;
pub mod docstring;
pub mod error;
pub mod extract;
pub mod logging;
pub mod prelude;
pub mod reconcile;
pub mod record;
pub mod report;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{HintcheckError, HintcheckResult};

// Data model
pub use record::{FunctionRecord, TypeMap};

// Pipeline stages
pub use annotations::parse_annotations;
pub use docstring::{is_single_line, parse_docstring_args};
pub use extract::extract_functions;
pub use reconcile::reconcile;

// File driver
pub use check::{check_file, check_source, is_ignored, FileReport, SOURCE_EXTENSION};

// Configuration
pub use config::{load_config, HintcheckConfig, OutputConfig};

// Logging
pub use logging::init_logging;

// Reporting
pub use report::{print_json, print_plain};
