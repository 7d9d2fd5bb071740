//! Error types and exit codes for arbor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable tree file, structural violation)
//!
//! A search that finds no matching leaf is not an error; it yields an
//! empty path.

mod macros;

use thiserror::Error;

/// Exit codes for the arbor CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid tree description or shape (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or searching a tree
#[derive(Error, Debug)]
pub enum ArborError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    /// A node would gain a second owner, become its own ancestor, or be left
    /// outside the tree.
    #[error("structural violation: {reason}")]
    StructuralViolation { reason: String },

    #[error("unknown node id: {id}")]
    UnknownNode { id: usize },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    /// The comparator could not order two values (e.g. NaN).
    #[error("values cannot be ordered: {context}")]
    OrderingUnsupported { context: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ArborError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArborError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        ArborError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a comparator that returned no ordering
    pub fn ordering_unsupported(context: impl std::fmt::Display) -> Self {
        ArborError::OrderingUnsupported {
            context: context.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArborError::UnknownFormat(_)
            | ArborError::UsageError(_)
            | ArborError::InvalidValue { .. } => ExitCode::Usage,

            ArborError::StructuralViolation { .. }
            | ArborError::UnknownNode { .. }
            | ArborError::NotFound { .. }
            | ArborError::Json(_)
            | ArborError::Toml(_) => ExitCode::Data,

            ArborError::OrderingUnsupported { .. } | ArborError::Io(_) | ArborError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ArborError::UnknownFormat(_) => "unknown_format",
            ArborError::UsageError(_) => "usage_error",
            ArborError::InvalidValue { .. } => "invalid_value",
            ArborError::StructuralViolation { .. } => "structural_violation",
            ArborError::UnknownNode { .. } => "unknown_node",
            ArborError::NotFound { .. } => "not_found",
            ArborError::OrderingUnsupported { .. } => "ordering_unsupported",
            ArborError::Io(_) => "io_error",
            ArborError::Json(_) => "json_error",
            ArborError::Toml(_) => "toml_error",
            ArborError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arbor operations
pub type Result<T> = std::result::Result<T, ArborError>;
