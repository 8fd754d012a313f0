//! Transient response file handed to the editor via `-CmdLineFile=`.

use std::io::Write;
use std::path::Path;

use tempfile::TempPath;
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};

/// A uniquely named file listing one argument per line.
///
/// The file is deleted when this value is dropped, on every exit path,
/// including unwinding out of a failed editor run.
#[derive(Debug)]
pub struct ResponseFile {
    path: TempPath,
}

impl ResponseFile {
    /// Write `lines` to a new file in the system temp directory.
    pub fn create<I, S>(lines: I) -> RuntimeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::create_in(&std::env::temp_dir(), lines)
    }

    /// Write `lines` to a new file in `dir`.
    pub fn create_in<I, S>(dir: &Path, lines: I) -> RuntimeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut file = tempfile::Builder::new()
            .prefix("ruleranger-")
            .suffix(".txt")
            .tempfile_in(dir)
            .map_err(RuntimeError::ResponseFile)?;

        for line in lines {
            writeln!(file, "{}", line.as_ref()).map_err(RuntimeError::ResponseFile)?;
        }
        file.flush().map_err(RuntimeError::ResponseFile)?;

        // Close our handle so the editor can open the file on every platform.
        let path = file.into_temp_path();
        debug!("Wrote response file {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now, reporting any failure instead of ignoring it.
    pub fn close(self) -> RuntimeResult<()> {
        self.path.close().map_err(RuntimeError::ResponseFile)
    }
}
