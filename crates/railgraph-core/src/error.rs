//! Error types and exit codes for railgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed route list, missing route, no matching walk)

use thiserror::Error;

/// Exit codes reported by the railgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad route list or unsatisfiable query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during railgraph operations
#[derive(Error, Debug)]
pub enum RailError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed route label {label:?}: {reason}")]
    MalformedRoute { label: String, reason: String },

    #[error("duplicate route {from}{to}")]
    DuplicateRoute { from: String, to: String },

    #[error("no route from {from} to {to}")]
    UnknownRoute { from: String, to: String },

    #[error("NO SUCH ROUTE")]
    NoSuchRoute,

    #[error("no route satisfies the query")]
    NoRoute,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RailError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RailError::UnknownFormat(_) | RailError::UsageError(_) => ExitCode::Usage,

            // Data errors
            RailError::MalformedRoute { .. }
            | RailError::DuplicateRoute { .. }
            | RailError::UnknownRoute { .. }
            | RailError::NoSuchRoute
            | RailError::NoRoute => ExitCode::Data,

            // Generic failures
            RailError::Io(_) | RailError::Json(_) | RailError::Toml(_) | RailError::Other(_) => {
                ExitCode::Failure
            }
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RailError::UnknownFormat(_) => "unknown_format",
            RailError::UsageError(_) => "usage_error",
            RailError::MalformedRoute { .. } => "malformed_route",
            RailError::DuplicateRoute { .. } => "duplicate_route",
            RailError::UnknownRoute { .. } => "unknown_route",
            RailError::NoSuchRoute => "no_such_route",
            RailError::NoRoute => "no_route",
            RailError::Io(_) => "io_error",
            RailError::Json(_) => "json_error",
            RailError::Toml(_) => "toml_error",
            RailError::Other(_) => "other",
        }
    }
}

/// Result type alias for railgraph operations
pub type Result<T> = std::result::Result<T, RailError>;
