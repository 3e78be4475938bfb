//! Error types and exit codes for algotrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid start vertex)
//! - 3: Data error (graph failed validation, unknown graph id)

mod macros;

use thiserror::Error;

/// Exit codes for the algotrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph, unknown graph id (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Reasons a raw graph is refused at registration time.
///
/// Raised before any graph is created, so a failed registration never
/// leaves a partial graph behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("vertex id is empty after trimming")]
    EmptyVertexId,

    #[error("duplicate vertex: {id}")]
    DuplicateVertex { id: String },

    #[error("edge {edge} references unknown vertex {vertex}")]
    UnknownVertex { edge: String, vertex: String },

    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: String, weight: f64 },

    #[error("edge {edge} has a non-finite weight")]
    NonFiniteWeight { edge: String },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: String },
}

/// Errors that can occur during algotrace operations
#[derive(Error, Debug)]
pub enum TraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dijkstra or prim)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid start vertex: {start}")]
    InvalidStart { start: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {0}")]
    Validation(#[from] ValidationError),

    #[error("graph not found: {id}")]
    GraphNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TraceError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph id that is not registered
    pub fn graph_not_found(id: impl std::fmt::Display) -> Self {
        TraceError::GraphNotFound { id: id.to_string() }
    }

    /// Create an error for a start vertex absent from the graph
    pub fn invalid_start(start: impl Into<String>) -> Self {
        TraceError::InvalidStart {
            start: start.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraceError::UnknownFormat(_)
            | TraceError::UnknownAlgorithm(_)
            | TraceError::UsageError(_)
            | TraceError::InvalidStart { .. }
            | TraceError::InvalidValue { .. } => ExitCode::Usage,

            TraceError::Validation(_) | TraceError::GraphNotFound { .. } => ExitCode::Data,

            TraceError::Io(_)
            | TraceError::Yaml(_)
            | TraceError::Json(_)
            | TraceError::Toml(_)
            | TraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TraceError::UnknownFormat(_) => "unknown_format",
            TraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            TraceError::UsageError(_) => "usage_error",
            TraceError::InvalidStart { .. } => "invalid_start",
            TraceError::InvalidValue { .. } => "invalid_value",
            TraceError::Validation(_) => "validation_error",
            TraceError::GraphNotFound { .. } => "not_found",
            TraceError::Io(_) => "io_error",
            TraceError::Yaml(_) => "yaml_error",
            TraceError::Json(_) => "json_error",
            TraceError::Toml(_) => "toml_error",
            TraceError::Other(_) => "other",
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

/// Result type alias for algotrace operations
pub type Result<T> = std::result::Result<T, TraceError>;
