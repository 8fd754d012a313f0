//! Staged file discovery through git.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};

/// Lists files staged for the next commit.
pub trait StagedFileSource {
    /// Staged paths, relative to the repository root, limited to `pathspecs`.
    ///
    /// An empty `pathspecs` list means the whole index.
    fn staged_files(&self, repo_dir: &Path, pathspecs: &[String]) -> RuntimeResult<Vec<String>>;
}

/// [`StagedFileSource`] that shells out to `git diff-index --cached`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIndex;

impl StagedFileSource for GitIndex {
    fn staged_files(&self, repo_dir: &Path, pathspecs: &[String]) -> RuntimeResult<Vec<String>> {
        let output = Command::new("git")
            .current_dir(repo_dir)
            .args(["diff-index", "--cached", "--name-only", "-z", "HEAD", "--"])
            .args(pathspecs)
            .output()
            .map_err(|e| RuntimeError::Git(format!("could not run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RuntimeError::Git(stderr.trim().to_string()));
        }

        let files = parse_name_list(&output.stdout);
        debug!(count = files.len(), "Staged files listed");
        Ok(files)
    }
}

/// Split NUL-separated `--name-only -z` output.
fn parse_name_list(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == 0)
        .map(String::from_utf8_lossy)
        .map(std::borrow::Cow::into_owned)
        .filter(|name| !name.is_empty())
        .collect()
}
