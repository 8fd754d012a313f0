//! Filesystem access used while locating an engine.

use std::io;
use std::path::Path;

/// The two filesystem queries resolution needs.
pub trait FsProvider {
    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Backed by `std::fs`.
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
