//! Core domain for RuleRanger asset checks.
//!
//! - [`engine`]: locate the Unreal Engine installation for a project and
//!   resolve the editor binaries inside it
//! - [`assets`]: turn on-disk content files into `/Game/...` asset paths
//! - [`report`]: the JSON report written by the RuleRanger commandlet
//!
//! Nothing in this crate spawns processes; see `ruleranger-runtime` for that.

#![deny(unused_crate_dependencies)]

pub mod assets;
pub mod engine;
pub mod report;

// Re-export commonly used types for convenience
pub use assets::{
    ASSET_EXTENSIONS, CONTENT_ROOT, DEFAULT_ASSET_PATH, asset_path_for, asset_paths_for,
};
pub use engine::{
    CommandMap, EngineCommand, EngineError, EngineHome, EngineHomeSource, ErrorCategory,
    HOME_ENV_VAR, HOME_OVERRIDE_FILE, OsFamily, ProjectDescriptor, VersionTag,
    binary_layout, default_home_candidates, locate_engine_home, locate_engine_home_with,
    resolve_commands, resolve_commands_with,
};
pub use report::{AssetResult, ReportError, ReportSummary, ValidationReport};

#[cfg(test)]
use tempfile as _;
