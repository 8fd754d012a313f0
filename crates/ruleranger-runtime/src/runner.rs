//! Editor process execution.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};
use crate::invocation::log_command_execution;

/// How an editor run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Non-zero exit code reported by the editor.
    Failed(i32),
}

impl RunStatus {
    pub const fn from_code(code: i32) -> Self {
        if code == 0 { Self::Success } else { Self::Failed(code) }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failed(code) => code,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Runs the editor to completion.
///
/// Stdio is inherited so the editor's own output reaches the terminal.
pub trait EditorRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> RuntimeResult<RunStatus>;
}

/// [`EditorRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEditorRunner;

impl EditorRunner for SystemEditorRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> RuntimeResult<RunStatus> {
        log_command_execution(program, args);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| RuntimeError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        debug!(?status, "Editor exited");

        status
            .code()
            .map(RunStatus::from_code)
            .ok_or_else(|| RuntimeError::Terminated {
                program: program.to_path_buf(),
            })
    }
}
