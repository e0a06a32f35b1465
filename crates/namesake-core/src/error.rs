//! Error types and exit codes for namesake
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, network, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (missing corpus, missing or empty noun list)
//!
//! The extraction and similarity algorithms never fail; only the adapters
//! around them (corpus loading, word lists, catalog search, reports) do.

mod macros;

use std::path::PathBuf;

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
    /// Data error - missing corpus or noun list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during namesake operations
#[derive(Error, Debug)]
pub enum NamesakeError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("corpus not found at {path:?}")]
    CorpusNotFound { path: PathBuf },

    #[error("noun list not found at {path:?} (run `namesake extract` first)")]
    NounListNotFound { path: PathBuf },

    #[error("no proper nouns found in {path:?}")]
    EmptyNounList { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("Check interrupted. Partial results were saved.")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl From<ureq::Error> for NamesakeError {
    fn from(err: ureq::Error) -> Self {
        NamesakeError::Http(err.to_string())
    }
}

impl NamesakeError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NamesakeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NamesakeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NamesakeError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NamesakeError::UsageError(_)
            | NamesakeError::InvalidValue { .. } => ExitCode::Usage,

            NamesakeError::CorpusNotFound { .. }
            | NamesakeError::NounListNotFound { .. }
            | NamesakeError::EmptyNounList { .. }
            | NamesakeError::NotFound { .. } => ExitCode::Data,

            NamesakeError::Io(_)
            | NamesakeError::Json(_)
            | NamesakeError::Toml(_)
            | NamesakeError::Csv(_)
            | NamesakeError::Http(_)
            | NamesakeError::FailedOperationWithTarget { .. }
            | NamesakeError::Interrupted
            | NamesakeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NamesakeError::UsageError(_) => "usage_error",
            NamesakeError::InvalidValue { .. } => "invalid_value",
            NamesakeError::CorpusNotFound { .. } => "corpus_not_found",
            NamesakeError::NounListNotFound { .. } => "noun_list_not_found",
            NamesakeError::EmptyNounList { .. } => "empty_noun_list",
            NamesakeError::NotFound { .. } => "not_found",
            NamesakeError::Io(_) => "io_error",
            NamesakeError::Json(_) => "json_error",
            NamesakeError::Toml(_) => "toml_error",
            NamesakeError::Csv(_) => "csv_error",
            NamesakeError::Http(_) => "http_error",
            NamesakeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NamesakeError::Interrupted => "interrupted",
            NamesakeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for namesake operations
pub type Result<T> = std::result::Result<T, NamesakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            NamesakeError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            NamesakeError::invalid_value("strategy", "nope").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            NamesakeError::NounListNotFound {
                path: PathBuf::from("missing.txt")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(NamesakeError::Interrupted.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_io_operation_is_a_generic_failure() {
        let err = NamesakeError::io_operation("write", "nouns.txt", "disk full");
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.to_string(), "failed to write nouns.txt: disk full");
        assert_eq!(err.to_json()["error"]["type"], "failed_operation_with_target");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = NamesakeError::invalid_value("max distance", "-1");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid max distance: -1");
    }
}
