//! Typed error handling for hintcheck.
//!
//! Every variant is terminal for the whole run: the first violation found,
//! scanning files in argument order and functions in source order, ends the
//! invocation. Checks return these as ordinary `Result` values and only the
//! CLI maps them to a process exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hintcheck operations.
///
/// Structured variants let library consumers match on the failure kind and
/// recover the offending function/argument, unlike opaque `anyhow::Error`.
#[derive(Error, Debug)]
pub enum HintcheckError {
    /// No files were supplied to check
    #[error("No files to check")]
    Usage,

    /// File extension is not the recognized source extension
    #[error("Unsupported file type (expected '.py'): {path}")]
    UnsupportedFileType { path: PathBuf },

    /// Path could not be opened for reading
    #[error("No such file or directory: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matched function has an empty docstring body
    #[error("Function '{function}' is missing a docstring")]
    MissingDocstring { function: String },

    /// One or more non-variadic parameters lack a type annotation
    #[error("No type hint on one or more arguments of '{function}': {params}")]
    MissingTypeHint { function: String, params: String },

    /// Declared-parameter count differs from documented-argument count
    #[error(
        "Function '{function}' declares {declared} argument(s) but its docstring documents {documented}"
    )]
    ArgumentCountMismatch {
        function: String,
        declared: usize,
        documented: usize,
    },

    /// A declared parameter has no docstring entry
    #[error("Argument '{argument}' or its type hint is not in the docstring for function '{function}'")]
    UndocumentedArgument { function: String, argument: String },

    /// Declared and documented type strings differ
    #[error(
        "Type hint mismatch for argument '{argument}' in function '{function}': declared '{declared}', documented '{documented}'"
    )]
    TypeHintMismatch {
        function: String,
        argument: String,
        declared: String,
        documented: String,
    },
}

impl HintcheckError {
    /// Create a file-not-found error with path context.
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-file-type error.
    pub fn unsupported_file_type(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFileType { path: path.into() }
    }

    /// Create a missing-docstring error.
    pub fn missing_docstring(function: impl Into<String>) -> Self {
        Self::MissingDocstring {
            function: function.into(),
        }
    }

    /// Create a missing-type-hint error carrying the raw parameter list.
    pub fn missing_type_hint(function: impl Into<String>, params: impl Into<String>) -> Self {
        Self::MissingTypeHint {
            function: function.into(),
            params: params.into(),
        }
    }

    /// Create an argument-count-mismatch error.
    pub fn count_mismatch(function: impl Into<String>, declared: usize, documented: usize) -> Self {
        Self::ArgumentCountMismatch {
            function: function.into(),
            declared,
            documented,
        }
    }

    /// Create an undocumented-argument error.
    pub fn undocumented(function: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::UndocumentedArgument {
            function: function.into(),
            argument: argument.into(),
        }
    }

    /// Create a type-hint-mismatch error.
    pub fn type_mismatch(
        function: impl Into<String>,
        argument: impl Into<String>,
        declared: impl Into<String>,
        documented: impl Into<String>,
    ) -> Self {
        Self::TypeHintMismatch {
            function: function.into(),
            argument: argument.into(),
            declared: declared.into(),
            documented: documented.into(),
        }
    }

    /// Get the function associated with this error, if any.
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::MissingDocstring { function }
            | Self::MissingTypeHint { function, .. }
            | Self::ArgumentCountMismatch { function, .. }
            | Self::UndocumentedArgument { function, .. }
            | Self::TypeHintMismatch { function, .. } => Some(function),
            _ => None,
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::UnsupportedFileType { path } => Some(path),
            Self::FileNotFound { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for hintcheck results.
pub type HintcheckResult<T> = Result<T, HintcheckError>;
