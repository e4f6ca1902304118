//! Error types and exit codes for notekeep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input)
//! - 3: Data/store error (missing storage root, unknown note)
//!
//! Malformed persisted state (a corrupt sidecar index, an unreadable note
//! file) never becomes a `NoteError`; those paths degrade in place and log.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the notekeep CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing storage root, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notekeep operations
#[derive(Error, Debug)]
pub enum NoteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("path must be absolute: {path:?}")]
    NotAbsolute { path: PathBuf },

    #[error("directory is not writable: {path:?}")]
    NotWritable { path: PathBuf },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data/store errors (exit code 3)
    #[error("directory does not exist: {path:?}")]
    DirectoryNotFound { path: PathBuf },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

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

impl NoteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NoteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NoteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        NoteError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NoteError::UsageError(_)
            | NoteError::NotAbsolute { .. }
            | NoteError::NotWritable { .. }
            | NoteError::InvalidValue { .. }
            | NoteError::Unsupported { .. } => ExitCode::Usage,

            NoteError::DirectoryNotFound { .. } | NoteError::NoteNotFound { .. } => {
                ExitCode::Data
            }

            NoteError::Io(_)
            | NoteError::Json(_)
            | NoteError::FailedOperationWithTarget { .. }
            | NoteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NoteError::UsageError(_) => "usage_error",
            NoteError::NotAbsolute { .. } => "not_absolute",
            NoteError::NotWritable { .. } => "not_writable",
            NoteError::InvalidValue { .. } => "invalid_value",
            NoteError::Unsupported { .. } => "unsupported",
            NoteError::DirectoryNotFound { .. } => "directory_not_found",
            NoteError::NoteNotFound { .. } => "note_not_found",
            NoteError::Io(_) => "io_error",
            NoteError::Json(_) => "json_error",
            NoteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NoteError::Other(_) => "other",
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

/// Result type alias for notekeep operations
pub type Result<T> = std::result::Result<T, NoteError>;
