//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI. All concrete implementations are instantiated here:
//! - environment and filesystem providers (via ruleranger-core)
//! - editor runner and git staged-file source (via ruleranger-runtime)
//!
//! The check handler receives the composed context and never constructs
//! its own collaborators.

use std::path::{Path, PathBuf};

use ruleranger_core::OsFamily;
use ruleranger_core::engine::{EnvProvider, FsProvider, SystemEnv, SystemFs};
use ruleranger_runtime::{EditorRunner, GitIndex, StagedFileSource, SystemEditorRunner};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the project descriptor.
    pub working_dir: PathBuf,
    /// Directory the response file is written to.
    pub temp_dir: PathBuf,
    /// Platform whose engine layout is expected.
    pub os: OsFamily,
}

impl CliConfig {
    /// Create config for the current process.
    pub fn with_defaults() -> Result<Self, CliError> {
        Ok(Self {
            working_dir: std::env::current_dir()?,
            temp_dir: std::env::temp_dir(),
            os: OsFamily::current(),
        })
    }
}

/// Fully composed context for the check command.
pub struct CliContext {
    config: CliConfig,
    env: Box<dyn EnvProvider>,
    fs: Box<dyn FsProvider>,
    staged: Box<dyn StagedFileSource>,
    runner: Box<dyn EditorRunner>,
}

impl CliContext {
    /// Compose a context from explicit collaborators.
    pub fn new(
        config: CliConfig,
        env: Box<dyn EnvProvider>,
        fs: Box<dyn FsProvider>,
        staged: Box<dyn StagedFileSource>,
        runner: Box<dyn EditorRunner>,
    ) -> Self {
        Self {
            config,
            env,
            fs,
            staged,
            runner,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.config.working_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.config.temp_dir
    }

    pub const fn os(&self) -> OsFamily {
        self.config.os
    }

    pub fn env(&self) -> &dyn EnvProvider {
        self.env.as_ref()
    }

    pub fn fs(&self) -> &dyn FsProvider {
        self.fs.as_ref()
    }

    pub fn staged(&self) -> &dyn StagedFileSource {
        self.staged.as_ref()
    }

    pub fn runner(&self) -> &dyn EditorRunner {
        self.runner.as_ref()
    }
}

/// Bootstrap the CLI with the real process environment, filesystem,
/// git and editor.
pub fn bootstrap(config: CliConfig) -> CliContext {
    CliContext::new(
        config,
        Box::new(SystemEnv),
        Box::new(SystemFs),
        Box::new(GitIndex),
        Box::new(SystemEditorRunner),
    )
}
