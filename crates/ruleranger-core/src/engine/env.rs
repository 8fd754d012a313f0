//! Process environment seen by the engine locator.

use std::ffi::OsString;
use std::path::PathBuf;

/// Source of environment variables and user directories.
pub trait EnvProvider {
    /// Raw value of `key`, if set.
    fn get(&self, key: &str) -> Option<OsString>;

    /// The working directory relative paths are resolved against.
    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    /// The user's home directory, used for `~` expansion.
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Reads the real process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}
