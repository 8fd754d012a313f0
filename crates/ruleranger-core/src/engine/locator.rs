//! Engine home resolution for a project.
//!
//! Resolution order (first match wins):
//! 1. `.unrealengine-home` file next to the project descriptor
//! 2. `UNREAL_HOME` environment variable
//! 3. Version-derived default install locations for the current OS
//!
//! A broken override (steps 1 and 2) is a configuration error and stops the
//! search; later steps are never consulted.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::{EnvProvider, SystemEnv};
use super::error::EngineError;
use super::fs::{FsProvider, SystemFs};
use super::platform::{OsFamily, default_home_candidates, normalize_user_path};
use super::version::{ProjectDescriptor, VersionTag};

/// Name of the override file in the project root.
pub const HOME_OVERRIDE_FILE: &str = ".unrealengine-home";

/// Environment variable naming an engine home.
pub const HOME_ENV_VAR: &str = "UNREAL_HOME";

/// How the engine home was derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineHomeSource {
    /// Read from the override file at this path.
    OverrideFile(PathBuf),
    /// Read from `UNREAL_HOME`.
    EnvVar,
    /// First existing default location for this version.
    Default(VersionTag),
}

impl fmt::Display for EngineHomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverrideFile(file) => write!(f, "{}", file.display()),
            Self::EnvVar => write!(f, "{HOME_ENV_VAR}"),
            Self::Default(version) => write!(f, "default location for {version}"),
        }
    }
}

/// Resolution result for the engine home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineHome {
    /// Absolute path to the engine installation. Existed when resolved.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: EngineHomeSource,
}

/// Locate the engine home for a project using the real environment.
pub fn locate_engine_home(descriptor: &Path) -> Result<EngineHome, EngineError> {
    locate_engine_home_with(descriptor, &SystemEnv, &SystemFs, OsFamily::current())
}

/// Locate the engine home with injected dependencies (for testing).
pub fn locate_engine_home_with(
    descriptor: &Path,
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
    os: OsFamily,
) -> Result<EngineHome, EngineError> {
    let project_root = descriptor.parent().unwrap_or_else(|| Path::new(""));

    // Step 1: override file
    if let Some(home) = home_from_override_file(project_root, env, fs)? {
        return Ok(home);
    }

    // Step 2: environment
    if let Some(home) = home_from_env(env, fs)? {
        return Ok(home);
    }

    // Step 3: version-derived defaults
    let version = ProjectDescriptor::read_version_tag(descriptor, fs)?;
    let candidates = default_home_candidates(os, &version);
    debug!(
        "Searching {} default location(s) for {version}",
        candidates.len()
    );

    if let Some(found) = candidates.iter().find(|c| fs.exists(c)) {
        debug!("Using engine home: {}", found.display());
        return Ok(EngineHome {
            path: found.clone(),
            source: EngineHomeSource::Default(version),
        });
    }

    Err(EngineError::home_not_found(version, &candidates))
}

fn home_from_override_file(
    project_root: &Path,
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
) -> Result<Option<EngineHome>, EngineError> {
    let file = project_root.join(HOME_OVERRIDE_FILE);
    if !fs.exists(&file) {
        return Ok(None);
    }

    let contents = fs
        .read_to_string(&file)
        .map_err(|e| EngineError::read(&file, &e))?;
    if contents.trim().is_empty() {
        return Err(EngineError::HomeOverrideEmpty { file });
    }

    let home = normalize_user_path(&contents, Some(project_root), env)?;
    if !fs.exists(&home) {
        return Err(EngineError::HomeOverrideMissing { file, home });
    }

    debug!("Using engine home from {}: {}", file.display(), home.display());
    Ok(Some(EngineHome {
        path: home,
        source: EngineHomeSource::OverrideFile(file),
    }))
}

fn home_from_env(
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
) -> Result<Option<EngineHome>, EngineError> {
    let Some(value) = env.get(HOME_ENV_VAR) else {
        return Ok(None);
    };
    let value = value.to_string_lossy();
    if value.trim().is_empty() {
        return Ok(None);
    }

    let cwd = env.current_dir();
    let home = normalize_user_path(&value, cwd.as_deref(), env)?;
    if !fs.exists(&home) {
        return Err(EngineError::EnvHomeMissing {
            var: HOME_ENV_VAR,
            home,
        });
    }

    debug!("Using engine home from {HOME_ENV_VAR}: {}", home.display());
    Ok(Some(EngineHome {
        path: home,
        source: EngineHomeSource::EnvVar,
    }))
}
