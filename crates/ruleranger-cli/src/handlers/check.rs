//! Check command handler.
//!
//! Finds the project, works out which assets to scan, locates the editor and
//! runs the RuleRanger commandlet through a response file.

use std::path::{Path, PathBuf};

use ruleranger_core::{
    EngineCommand, ValidationReport, asset_path_for, locate_engine_home_with,
    resolve_commands_with,
};
use ruleranger_runtime::{CommandletInvocation, ResponseFile, RunStatus, editor_args};
use tracing::{debug, info, warn};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::print_step;

/// Extension of the project descriptor.
pub const PROJECT_EXTENSION: &str = "uproject";

/// Report file name used when `--report` is not given.
pub const DEFAULT_REPORT_NAME: &str = "RuleRangerReport.json";

/// Printed when a staged-only run finds nothing to validate.
pub const NOTHING_STAGED: &str = "No staged Unreal assets. Skipping RuleRanger validation.";

/// Result of a check that did not fail.
#[derive(Debug)]
pub enum CheckOutcome {
    /// Staged-only run with no staged assets; the editor was not started.
    Skipped,
    /// The editor ran and exited successfully.
    Completed {
        report_path: PathBuf,
        /// `None` when the report was missing or unreadable.
        report: Option<ValidationReport>,
    },
}

/// Execute the check command.
pub fn execute(ctx: &CliContext, cli: &Cli) -> Result<CheckOutcome, CliError> {
    if cli.verbose {
        println!("Performing RuleRanger asset checking");
    }

    if cli.staged_only && cli.asset_path.is_some() {
        return Err(CliError::Precondition(
            "--staged-only is not compatible with --asset-path".to_string(),
        ));
    }

    let descriptor = find_project_descriptor(ctx.working_dir())?;
    if cli.verbose {
        print_step("Project", descriptor.display());
    }

    let mut asset_paths = Vec::new();
    if cli.staged_only {
        println!(" -> Restricting analysis to staged assets only");
        asset_paths = staged_asset_paths(ctx, &cli.files)?;
        if asset_paths.is_empty() {
            println!("{NOTHING_STAGED}");
            return Ok(CheckOutcome::Skipped);
        }
    }
    if let Some(extra) = &cli.asset_path {
        asset_paths.push(extra.clone());
    }

    let home = locate_engine_home_with(&descriptor, ctx.env(), ctx.fs(), ctx.os())?;
    if cli.verbose {
        print_step("Unreal Engine Home", format!("{} ({})", home.path.display(), home.source));
    }

    let commands = resolve_commands_with(
        &home.path,
        [EngineCommand::EditorCmd.name()],
        ctx.fs(),
        ctx.os(),
    )?;
    let editor_cmd = commands.require(EngineCommand::EditorCmd)?;
    if cli.verbose {
        print_step("Unreal Engine Editor Cmd", editor_cmd.display());
    }

    let report_path = report_path(ctx.working_dir(), cli.report.as_deref());
    let invocation = CommandletInvocation::new(&report_path)
        .asset_paths(asset_paths)
        .quiet(!cli.verbose)
        .fix(cli.fix)
        .exit_on_warning(cli.exit_on_warning);
    if cli.verbose {
        print_step("Assets", invocation.scanned_paths().join(", "));
        print_step("Report", report_path.display());
    }

    let status = {
        let response = ResponseFile::create_in(ctx.temp_dir(), invocation.arguments())?;
        let args = editor_args(&descriptor, response.path());
        let status = ctx.runner().run(editor_cmd, &args)?;
        if let Err(err) = response.close() {
            warn!("{err}");
        }
        status
    };

    if let RunStatus::Failed(code) = status {
        return Err(CliError::EditorFailed { code });
    }
    info!("RuleRanger finished, report at {}", report_path.display());

    let report = load_report(&report_path);
    Ok(CheckOutcome::Completed {
        report_path,
        report,
    })
}

/// The single `*.uproject` file in `dir`, as an absolute path.
pub fn find_project_descriptor(dir: &Path) -> Result<PathBuf, CliError> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PROJECT_EXTENSION) {
            matches.push(path);
        }
    }

    if matches.len() != 1 {
        return Err(CliError::Precondition(format!(
            "expected exactly 1 .{PROJECT_EXTENSION} file, found {}",
            matches.len()
        )));
    }

    let descriptor = matches.remove(0);
    if descriptor.is_absolute() {
        Ok(descriptor)
    } else {
        Ok(std::env::current_dir()?.join(descriptor))
    }
}

/// Where the commandlet writes its report.
pub fn report_path(working_dir: &Path, requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => working_dir.join(path),
        None => working_dir.join(DEFAULT_REPORT_NAME),
    }
}

/// Asset paths for files staged in git, skipping entries deleted from disk.
fn staged_asset_paths(ctx: &CliContext, pathspecs: &[String]) -> Result<Vec<String>, CliError> {
    let staged = ctx.staged().staged_files(ctx.working_dir(), pathspecs)?;
    debug!("{} staged file(s)", staged.len());

    let paths = staged
        .iter()
        .filter(|file| {
            let exists = ctx.fs().exists(&ctx.working_dir().join(file));
            if !exists {
                debug!("Skipping {file}: not on disk");
            }
            exists
        })
        .filter_map(|file| asset_path_for(file))
        .collect();
    Ok(paths)
}

fn load_report(path: &Path) -> Option<ValidationReport> {
    if !path.exists() {
        warn!("Report {} was not written", path.display());
        return None;
    }
    ValidationReport::load(path)
        .inspect_err(|err| warn!("{err}"))
        .ok()
}
