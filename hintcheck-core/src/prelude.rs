//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use hintcheck_core::prelude::*;
//! ```

// Error types
pub use crate::error::{HintcheckError, HintcheckResult};

// Data model
pub use crate::record::{FunctionRecord, TypeMap};

// Pipeline stages
pub use crate::annotations::parse_annotations;
pub use crate::docstring::{is_single_line, parse_docstring_args};
pub use crate::extract::extract_functions;
pub use crate::reconcile::reconcile;

// File driver
pub use crate::check::{check_file, check_source, FileReport};

// Configuration
pub use crate::config::{load_config, HintcheckConfig};
