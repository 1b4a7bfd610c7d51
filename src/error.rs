//! Error types for hassfest
//!
//! Uses `thiserror` for library errors. Recoverable findings (missing config
//! flow, stale generated file, ...) are not errors in this sense; they are
//! reported as [`ValidationError`](crate::domain::entities::ValidationError)
//! values so that one run surfaces every problem.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for hassfest operations
pub type HassfestResult<T> = Result<T, HassfestError>;

/// Fatal errors that abort a run
#[derive(Error, Debug)]
pub enum HassfestError {
    /// The components directory does not exist
    #[error("components directory not found: {path}")]
    ComponentsDirNotFound { path: PathBuf },

    /// The components directory exists but could not be listed
    #[error("cannot list components directory {path}: {source}")]
    ComponentsDirUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The previously generated file could not be read during validation
    #[error("cannot read generated file {path}: {source}")]
    GeneratedFileUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The generated file could not be written
    #[error("cannot write generated file {path}: {source}")]
    GeneratedFileUnwritable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A config flow exists but could not be read
    #[error("cannot read config flow {path}: {source}")]
    ConfigFlowUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid hassfest.toml
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Unknown value for the run action
    #[error("unknown action '{value}' (expected 'validate' or 'generate')")]
    UnknownAction { value: String },

    /// Unknown value for the output verbosity
    #[error("unknown verbosity '{value}' (expected 'quiet', 'normal', 'verbose' or 'debug')")]
    UnknownVerbosity { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
