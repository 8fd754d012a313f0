//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Run the RuleRanger commandlet over a project's assets.
///
/// Must be run from the directory holding the project's `.uproject` file.
#[derive(Debug, Parser)]
#[command(name = "ruleranger-check")]
#[command(about = "Validate Unreal assets with RuleRanger")]
#[command(version)]
pub struct Cli {
    /// Print progress and let the editor log normally
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only analyze assets staged in git (not compatible with --asset-path)
    #[arg(long = "staged-only")]
    pub staged_only: bool,

    /// Where the JSON report is written (default: ./RuleRangerReport.json)
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Additional asset path to analyze, such as /Game/Maps
    #[arg(long = "asset-path", value_name = "PATH")]
    pub asset_path: Option<String>,

    /// Ask RuleRanger to apply automatic fixes
    #[arg(long = "fix")]
    pub fix: bool,

    /// Fail when any warning is reported
    #[arg(long = "exit-on-warning")]
    pub exit_on_warning: bool,

    /// Files to consider when --staged-only is set
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}
