//! Platform detection and default install locations.

use std::path::{Path, PathBuf};

use super::env::EnvProvider;
use super::error::EngineError;
use super::version::VersionTag;

/// Operating system family, as far as engine layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    /// Linux and everything else. No default install locations are known.
    Other,
}

impl OsFamily {
    /// The family this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Default engine home candidates for a version, in the order they are tried.
///
/// - Windows: `C:\Program Files\Epic Games\<tag>`
/// - macOS: `/Users/Shared/Epic Games/<tag>`, then `/Applications/Epic Games/<tag>`
/// - Other: none
pub fn default_home_candidates(os: OsFamily, version: &VersionTag) -> Vec<PathBuf> {
    let tag = version.as_str();
    match os {
        OsFamily::Windows => vec![PathBuf::from(r"C:\Program Files\Epic Games").join(tag)],
        OsFamily::MacOs => vec![
            PathBuf::from("/Users/Shared/Epic Games").join(tag),
            PathBuf::from("/Applications/Epic Games").join(tag),
        ],
        OsFamily::Other => Vec::new(),
    }
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
///
/// Relative paths are joined onto `base`; `None` means the base could not be
/// determined and is only an error if the path actually is relative.
pub(super) fn normalize_user_path(
    raw: &str,
    base: Option<&Path>,
    env: &dyn EnvProvider,
) -> Result<PathBuf, EngineError> {
    let trimmed = raw.trim();

    let expanded = if trimmed == "~" {
        env.home_dir().ok_or(EngineError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        env.home_dir().ok_or(EngineError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        base.map(|dir| dir.join(&expanded))
            .ok_or(EngineError::NoCurrentDir)
    }
}
