//! Error types for process and file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or running external processes.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The response file could not be written.
    #[error("Failed to write response file: {0}")]
    ResponseFile(#[source] std::io::Error),

    /// The process could not be started at all.
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ended without an exit code (killed by a signal).
    #[error("{program} was terminated before it could report an exit code")]
    Terminated { program: PathBuf },

    /// Git could not list the staged files.
    #[error("Failed to list staged files: {0}")]
    Git(String),
}

/// Result type alias for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
