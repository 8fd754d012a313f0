//! CLI-specific error types and mappings.
//!
//! This module maps everything that can go wrong during a check onto the
//! process exit code.

use ruleranger_core::{EngineError, ErrorCategory};
use ruleranger_runtime::RuntimeError;
use thiserror::Error;

/// Exit code for precondition violations.
pub const EXIT_PRECONDITION: i32 = 1;

/// Exit code for any failure that is not the editor's own.
pub const EXIT_INTERNAL: i32 = -1;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The invocation cannot proceed as given (flags, project layout).
    #[error("{0}")]
    Precondition(String),

    /// The editor ran and reported failure.
    #[error("Unreal Editor exited with code {code}")]
    EditorFailed { code: i32 },

    /// Engine home or command resolution failed.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Response file, process or git failure.
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    /// IO error (working directory, project listing).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 1: precondition violations (descriptor count, incompatible flags)
    /// - editor's code: the editor itself failed
    /// - -1: everything else, including engine resolution failures
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Precondition(_) => EXIT_PRECONDITION,
            Self::EditorFailed { code } => *code,
            Self::Engine(_) | Self::Runtime(_) | Self::Io(_) => EXIT_INTERNAL,
        }
    }

    /// Short label printed ahead of the message.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Precondition(_) => "Error",
            Self::EditorFailed { .. } => "Error executing process",
            Self::Engine(err) => match err.category() {
                ErrorCategory::Configuration => "Configuration error",
                ErrorCategory::Resolution => "Resolution error",
                ErrorCategory::Unexpected => "An error occurred",
            },
            Self::Runtime(_) | Self::Io(_) => "An error occurred",
        }
    }
}
