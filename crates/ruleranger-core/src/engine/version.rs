//! Project descriptor parsing and engine version normalization.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::error::EngineError;
use super::fs::FsProvider;

/// The subset of a `.uproject` file this tool cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDescriptor {
    /// Engine version the project is pinned to, e.g. `"5.3"` or `"UE_5.3.2"`.
    #[serde(default)]
    pub engine_association: Option<String>,
}

impl ProjectDescriptor {
    /// Parse descriptor JSON. `path` is only used for error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, EngineError> {
        serde_json::from_str(contents).map_err(|e| EngineError::MalformedDescriptor {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a descriptor through the given filesystem.
    pub fn load(path: &Path, fs: &dyn FsProvider) -> Result<Self, EngineError> {
        let contents = fs
            .read_to_string(path)
            .map_err(|e| EngineError::read(path, &e))?;
        Self::parse(path, &contents)
    }

    /// Normalized version tag, if the association is present and non-empty.
    pub fn version_tag(&self) -> Option<VersionTag> {
        self.engine_association
            .as_deref()
            .and_then(VersionTag::normalize)
    }

    /// Load a descriptor and return its version tag, failing if there is none.
    pub fn read_version_tag(path: &Path, fs: &dyn FsProvider) -> Result<VersionTag, EngineError> {
        Self::load(path, fs)?
            .version_tag()
            .ok_or_else(|| EngineError::VersionNotFound {
                descriptor: path.to_path_buf(),
            })
    }
}

/// Canonical engine version tag of the form `UE_<major>.<minor>`.
///
/// Matches the folder names the Epic Games launcher installs into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    pub const PREFIX: &'static str = "UE_";

    /// Normalize a raw `EngineAssociation` value.
    ///
    /// Strips one leading `UE_`, keeps only `major.minor` when more components
    /// are present, and re-adds the prefix. Returns `None` for empty input.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed);
        if bare.is_empty() {
            return None;
        }

        let mut parts = bare.split('.');
        let version = match (parts.next(), parts.next()) {
            (Some(major), Some(minor)) => format!("{major}.{minor}"),
            _ => bare.to_string(),
        };

        Some(Self(format!("{}{version}", Self::PREFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
