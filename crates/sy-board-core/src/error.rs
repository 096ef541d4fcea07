//! Error types and exit codes for sy-board
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (file writes, serialization)
//! - 2: Usage error (bad flags/args, unusable output directory)
//! - 3: Board data error (edge endpoint outside the board)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Board data error - malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while generating board files
#[derive(Error, Debug)]
pub enum BoardError {
    // Usage errors (exit code 2)
    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Board data errors (exit code 3)
    #[error("edge {index} references vertex {vertex}, but the board has {vertex_count} vertices")]
    VertexOutOfRange {
        index: usize,
        vertex: usize,
        vertex_count: usize,
    },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BoardError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed XML serialization step
    pub fn xml(element: &str, error: impl std::fmt::Display) -> Self {
        BoardError::FailedOperationWithTarget {
            operation: "serialize".to_string(),
            target: format!("<{}>", element),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BoardError::DuplicateFormat | BoardError::UsageError(_) => ExitCode::Usage,

            BoardError::VertexOutOfRange { .. } => ExitCode::Data,

            BoardError::Json(_)
            | BoardError::FailedOperationWithTarget { .. }
            | BoardError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BoardError::DuplicateFormat => "duplicate_format",
            BoardError::UsageError(_) => "usage_error",
            BoardError::VertexOutOfRange { .. } => "vertex_out_of_range",
            BoardError::Json(_) => "json_error",
            BoardError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            BoardError::Other(_) => "other",
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

/// Result type alias for sy-board operations
pub type Result<T> = std::result::Result<T, BoardError>;
