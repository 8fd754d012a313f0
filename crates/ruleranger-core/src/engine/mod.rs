//! Unreal Engine installation and binary resolution.
//!
//! This module answers two questions for a project descriptor:
//! - Where is the engine installation ("engine home") the project is pinned to?
//! - Where, inside that installation, are the editor binaries?
//!
//! # Design
//!
//! - Returns `PathBuf` and `EngineError` for clear error handling
//! - Environment and filesystem access go through [`EnvProvider`] and
//!   [`FsProvider`] so every resolution step can be tested without touching disk
//! - OS-specific layout is a pure function of [`OsFamily`] and [`EngineCommand`]
//! - Nothing is cached: every call resolves from scratch

mod commands;
mod env;
mod error;
mod fs;
mod locator;
mod platform;
mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Error type
pub use error::{EngineError, ErrorCategory};

// Injectable providers
pub use env::{EnvProvider, SystemEnv};
pub use fs::{FsProvider, SystemFs};

// Platform layout
pub use platform::{OsFamily, default_home_candidates};

// Descriptor and version
pub use version::{ProjectDescriptor, VersionTag};

// Engine home
pub use locator::{
    EngineHome, EngineHomeSource, HOME_ENV_VAR, HOME_OVERRIDE_FILE, locate_engine_home,
    locate_engine_home_with,
};

// Binaries
pub use commands::{
    CommandMap, EngineCommand, binary_layout, resolve_commands, resolve_commands_with,
};
