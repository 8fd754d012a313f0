//! RuleRanger commandlet invocation builder.
//!
//! The editor receives only the project descriptor and `-CmdLineFile=`;
//! the commandlet options travel through the response file, one per line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ruleranger_core::DEFAULT_ASSET_PATH;
use tracing::info;

/// Name passed to `-run=`.
pub const COMMANDLET_NAME: &str = "RuleRanger";

/// Builder for the lines written to the response file.
///
/// # Example
///
/// ```rust,ignore
/// let lines = CommandletInvocation::new(report_path)
///     .asset_paths(["/Game/Maps"])
///     .quiet(!verbose)
///     .fix(true)
///     .arguments();
/// ```
#[derive(Debug, Clone)]
pub struct CommandletInvocation {
    report: PathBuf,
    asset_paths: Vec<String>,
    quiet: bool,
    fix: bool,
    exit_on_warning: bool,
}

impl CommandletInvocation {
    /// Create a new invocation writing its report to `report`.
    ///
    /// Output is quiet unless [`quiet`](Self::quiet) is turned off.
    pub fn new(report: impl Into<PathBuf>) -> Self {
        Self {
            report: report.into(),
            asset_paths: Vec::new(),
            quiet: true,
            fix: false,
            exit_on_warning: false,
        }
    }

    /// Add one asset path to scan.
    pub fn asset_path(mut self, path: impl Into<String>) -> Self {
        self.asset_paths.push(path.into());
        self
    }

    /// Add several asset paths to scan, keeping their order.
    pub fn asset_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Ask the commandlet to apply automatic fixes.
    pub fn fix(mut self, enabled: bool) -> Self {
        self.fix = enabled;
        self
    }

    /// Treat warnings as a failing exit code.
    pub fn exit_on_warning(mut self, enabled: bool) -> Self {
        self.exit_on_warning = enabled;
        self
    }

    pub fn report_path(&self) -> &Path {
        &self.report
    }

    /// The asset paths that will be scanned; `/Game` when none were added.
    pub fn scanned_paths(&self) -> Vec<&str> {
        if self.asset_paths.is_empty() {
            vec![DEFAULT_ASSET_PATH]
        } else {
            self.asset_paths.iter().map(String::as_str).collect()
        }
    }

    /// Render the response file lines.
    ///
    /// Order is fixed:
    /// 1. `-run=RuleRanger`
    /// 2. `-paths=` with comma separated asset paths
    /// 3. `-report=`
    /// 4. `-quiet`, `-fix`, `-exitOnWarning` when enabled
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            format!("-run={COMMANDLET_NAME}"),
            format!("-paths={}", self.scanned_paths().join(",")),
            format!("-report={}", self.report.display()),
        ];

        if self.quiet {
            args.push("-quiet".to_string());
        }
        if self.fix {
            args.push("-fix".to_string());
        }
        if self.exit_on_warning {
            args.push("-exitOnWarning".to_string());
        }

        args
    }
}

/// Editor arguments pointing it at the project and the response file.
pub fn editor_args(project: &Path, response_file: &Path) -> Vec<OsString> {
    let mut cmd_line_file = OsString::from("-CmdLineFile=");
    cmd_line_file.push(response_file);
    vec![project.as_os_str().to_os_string(), cmd_line_file]
}

/// Log the command about to be executed.
pub fn log_command_execution(program: &Path, args: &[OsString]) {
    let args: Vec<_> = args.iter().map(|arg| arg.to_string_lossy()).collect();

    if args.is_empty() {
        info!("Executing: {}", program.display());
    } else {
        info!("Executing: {} {}", program.display(), args.join(" "));
    }
}
