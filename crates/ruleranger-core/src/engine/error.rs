//! Engine resolution error types.
//!
//! Every variant carries the paths that were involved so that a failed run
//! can be fixed from the message alone, without re-running with `--verbose`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::commands::EngineCommand;
use super::version::VersionTag;

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The user's setup is wrong (broken override, missing version field).
    Configuration,
    /// The search order was exhausted without finding a home or binary.
    Resolution,
    /// I/O failures and malformed input.
    Unexpected,
}

/// Errors that can occur while locating an engine or its binaries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The override file exists but has no content.
    #[error("{file} is empty; it must contain the path of an Unreal Engine installation")]
    HomeOverrideEmpty { file: PathBuf },

    /// The override file names a path that does not exist.
    #[error("{file} points to non-existent path: {home}")]
    HomeOverrideMissing { file: PathBuf, home: PathBuf },

    /// The environment override names a path that does not exist.
    #[error("{var} environment variable points to non-existent path: {home}")]
    EnvHomeMissing { var: &'static str, home: PathBuf },

    /// The project descriptor has no usable `EngineAssociation`.
    #[error("No EngineAssociation found in {descriptor}")]
    VersionNotFound { descriptor: PathBuf },

    /// None of the version-derived default locations exist.
    #[error("Could not locate Unreal Engine home for version {version}. Tried:\n{attempts}")]
    HomeNotFound {
        version: VersionTag,
        candidates: Vec<PathBuf>,
        attempts: String,
    },

    /// A command name outside the known set was requested.
    #[error("Unknown command name requested: {0}")]
    UnknownCommand(String),

    /// A known command has no binary at its expected location.
    #[error("Command {command} not found at {path}")]
    CommandNotFound {
        command: EngineCommand,
        path: PathBuf,
    },

    /// A command was looked up in a map that was not built for it.
    #[error("Command {0} was not part of the resolved command set")]
    NotRequested(EngineCommand),

    /// Failed to read a file involved in resolution.
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The project descriptor is not valid JSON.
    #[error("Malformed project descriptor {path}: {reason}")]
    MalformedDescriptor { path: PathBuf, reason: String },

    /// Could not determine the user's home directory for `~` expansion.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the working directory for a relative path.
    #[error("Cannot determine current directory")]
    NoCurrentDir,
}

impl EngineError {
    /// Create a `HomeNotFound` error listing every candidate that was tried.
    pub fn home_not_found(version: VersionTag, candidates: &[PathBuf]) -> Self {
        let attempts = candidates
            .iter()
            .map(|c| format!("  ✗ {}: not found", c.display()))
            .collect::<Vec<_>>()
            .join("\n");

        Self::HomeNotFound {
            version,
            candidates: candidates.to_vec(),
            attempts: if attempts.is_empty() {
                "  (no default install locations on this platform)".to_string()
            } else {
                attempts
            },
        }
    }

    pub(crate) fn read(path: &Path, err: &std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Classify this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::HomeOverrideEmpty { .. }
            | Self::HomeOverrideMissing { .. }
            | Self::EnvHomeMissing { .. }
            | Self::VersionNotFound { .. }
            | Self::UnknownCommand(_) => ErrorCategory::Configuration,
            Self::HomeNotFound { .. } | Self::CommandNotFound { .. } => ErrorCategory::Resolution,
            Self::NotRequested(_)
            | Self::Read { .. }
            | Self::MalformedDescriptor { .. }
            | Self::NoHomeDir
            | Self::NoCurrentDir => ErrorCategory::Unexpected,
        }
    }
}
