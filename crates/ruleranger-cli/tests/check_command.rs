//! End-to-end tests for the check command.
//!
//! Projects and engine installs are real directories under a tempdir; the
//! editor and git are mocked so no external process is started.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::Parser;
use mockall::mock;
use ruleranger_cli::{CheckOutcome, Cli, CliConfig, CliContext};
use ruleranger_cli::handlers::check::{self, NOTHING_STAGED};
use ruleranger_core::engine::testing::MockEnv;
use ruleranger_core::engine::SystemFs;
use ruleranger_core::{EngineCommand, OsFamily, binary_layout};
use ruleranger_runtime::{
    EditorRunner, RunStatus, RuntimeError, RuntimeResult, StagedFileSource,
};
use tempfile::TempDir;

mock! {
    Runner {}
    impl EditorRunner for Runner {
        fn run(&self, program: &Path, args: &[OsString]) -> RuntimeResult<RunStatus>;
    }
}

mock! {
    Staged {}
    impl StagedFileSource for Staged {
        fn staged_files(&self, repo_dir: &Path, pathspecs: &[String]) -> RuntimeResult<Vec<String>>;
    }
}

const OS: OsFamily = OsFamily::MacOs;

/// A project directory, an engine install and a private temp dir.
struct Fixture {
    project: TempDir,
    engine: TempDir,
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let project = tempfile::tempdir().unwrap();
        fs::write(
            project.path().join("Game.uproject"),
            r#"{"FileVersion": 3, "EngineAssociation": "5.3.2"}"#,
        )
        .unwrap();

        let engine = tempfile::tempdir().unwrap();
        let editor = engine.path().join(binary_layout(OS, EngineCommand::EditorCmd));
        fs::create_dir_all(editor.parent().unwrap()).unwrap();
        fs::write(&editor, "").unwrap();

        Self {
            project,
            engine,
            temp: tempfile::tempdir().unwrap(),
        }
    }

    fn editor(&self) -> PathBuf {
        self.engine.path().join(binary_layout(OS, EngineCommand::EditorCmd))
    }

    fn descriptor(&self) -> PathBuf {
        self.project.path().join("Game.uproject")
    }

    fn default_report(&self) -> PathBuf {
        self.project.path().join("RuleRangerReport.json")
    }

    fn touch(&self, relative: &str) {
        let path = self.project.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    /// Environment with `UNREAL_HOME` pointing at the engine.
    fn env(&self) -> MockEnv {
        MockEnv::new()
            .with_var("UNREAL_HOME", self.engine.path().as_os_str())
            .with_current_dir(self.project.path())
    }

    fn context(&self, env: MockEnv, staged: MockStaged, runner: MockRunner) -> CliContext {
        self.context_on(OS, env, staged, runner)
    }

    fn context_on(
        &self,
        os: OsFamily,
        env: MockEnv,
        staged: MockStaged,
        runner: MockRunner,
    ) -> CliContext {
        let config = CliConfig {
            working_dir: self.project.path().to_path_buf(),
            temp_dir: self.temp.path().to_path_buf(),
            os,
        };
        CliContext::new(
            config,
            Box::new(env),
            Box::new(SystemFs),
            Box::new(staged),
            Box::new(runner),
        )
    }

    fn leftover_temp_files(&self) -> usize {
        fs::read_dir(self.temp.path()).unwrap().count()
    }
}

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("ruleranger-check").chain(args.iter().copied()))
}

/// What the mocked editor was started with.
#[derive(Debug, Default)]
struct Recorded {
    program: PathBuf,
    project: OsString,
    lines: Vec<String>,
}

/// Runner that records its invocation, including the response file
/// contents while it still exists, and returns `status`.
fn recording_runner(status: RunStatus) -> (MockRunner, Arc<Mutex<Recorded>>) {
    let seen = Arc::new(Mutex::new(Recorded::default()));
    let captured = Arc::clone(&seen);

    let mut runner = MockRunner::new();
    runner.expect_run().times(1).returning(move |program, args| {
        let response = args[1]
            .to_str()
            .and_then(|arg| arg.strip_prefix("-CmdLineFile="))
            .unwrap();
        let contents = fs::read_to_string(response).unwrap();

        let mut recorded = captured.lock().unwrap();
        recorded.program = program.to_path_buf();
        recorded.project = args[0].clone();
        recorded.lines = contents.lines().map(String::from).collect();
        Ok(status)
    });
    (runner, seen)
}

fn idle_runner() -> MockRunner {
    let mut runner = MockRunner::new();
    runner.expect_run().never();
    runner
}

fn idle_staged() -> MockStaged {
    let mut staged = MockStaged::new();
    staged.expect_staged_files().never();
    staged
}

#[test]
fn runs_commandlet_over_whole_project_by_default() {
    let fx = Fixture::new();
    let (runner, seen) = recording_runner(RunStatus::Success);

    let ctx = fx.context(fx.env(), idle_staged(), runner);
    let outcome = check::execute(&ctx, &cli(&[])).unwrap();

    let report = fx.default_report();
    let recorded = seen.lock().unwrap();
    assert_eq!(recorded.program, fx.editor());
    assert_eq!(recorded.project, fx.descriptor().into_os_string());
    assert_eq!(
        recorded.lines,
        vec![
            "-run=RuleRanger".to_string(),
            "-paths=/Game".to_string(),
            format!("-report={}", report.display()),
            "-quiet".to_string(),
        ]
    );
    assert!(matches!(
        outcome,
        CheckOutcome::Completed { report_path, report: None } if report_path == report
    ));
    assert_eq!(fx.leftover_temp_files(), 0);
}

#[test]
fn verbose_fix_and_asset_path_reach_the_commandlet() {
    let fx = Fixture::new();
    let (runner, seen) = recording_runner(RunStatus::Success);

    let ctx = fx.context(fx.env(), idle_staged(), runner);
    check::execute(
        &ctx,
        &cli(&[
            "--verbose",
            "--fix",
            "--exit-on-warning",
            "--asset-path",
            "/Game/Maps",
            "--report",
            "out/report.json",
        ]),
    )
    .unwrap();

    let lines = seen.lock().unwrap().lines.clone();
    assert_eq!(lines[1], "-paths=/Game/Maps");
    assert_eq!(
        lines[2],
        format!("-report={}", fx.project.path().join("out/report.json").display())
    );
    assert!(!lines.contains(&"-quiet".to_string()));
    assert_eq!(&lines[3..], ["-fix", "-exitOnWarning"]);
}

#[test]
fn staged_only_without_assets_skips_engine() {
    let fx = Fixture::new();
    fx.touch("Source/Game/Main.cpp");

    let mut staged = MockStaged::new();
    staged
        .expect_staged_files()
        .times(1)
        .returning(|_, _| Ok(vec!["Source/Game/Main.cpp".to_string()]));

    // No UNREAL_HOME and no engine on this platform: locating it would fail.
    let env = MockEnv::new().with_current_dir(fx.project.path());
    let ctx = fx.context_on(OsFamily::Other, env, staged, idle_runner());

    let outcome = check::execute(&ctx, &cli(&["--staged-only"])).unwrap();

    assert!(matches!(outcome, CheckOutcome::Skipped));
    assert!(!fx.default_report().exists());
    assert_eq!(fx.leftover_temp_files(), 0);
    assert!(NOTHING_STAGED.starts_with("No staged Unreal assets"));
}

#[test]
fn staged_only_with_nothing_staged_skips() {
    let fx = Fixture::new();
    let mut staged = MockStaged::new();
    staged.expect_staged_files().times(1).returning(|_, _| Ok(Vec::new()));

    let ctx = fx.context(fx.env(), staged, idle_runner());
    let outcome = check::execute(&ctx, &cli(&["--staged-only"])).unwrap();

    assert!(matches!(outcome, CheckOutcome::Skipped));
}

#[test]
fn staged_only_scans_staged_assets_still_on_disk() {
    let fx = Fixture::new();
    fx.touch("Content/Maps/Level1.umap");
    fx.touch("Content/Characters/Hero.uasset");

    let project = fx.project.path().to_path_buf();
    let mut staged = MockStaged::new();
    staged
        .expect_staged_files()
        .withf(move |repo, specs| repo == project && specs == ["Content"])
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                "Content/Maps/Level1.umap".to_string(),
                "Content/Removed.uasset".to_string(),
                "Content/Characters/Hero.uasset".to_string(),
                "Content/Readme.txt".to_string(),
            ])
        });
    let (runner, seen) = recording_runner(RunStatus::Success);

    let ctx = fx.context(fx.env(), staged, runner);
    check::execute(&ctx, &cli(&["--staged-only", "Content"])).unwrap();

    assert_eq!(
        seen.lock().unwrap().lines[1],
        "-paths=/Game/Maps/Level1,/Game/Characters/Hero"
    );
}

#[test]
fn staged_only_with_asset_path_is_precondition_failure() {
    let fx = Fixture::new();
    let ctx = fx.context(fx.env(), idle_staged(), idle_runner());

    let err = check::execute(&ctx, &cli(&["--staged-only", "--asset-path", "/Game/UI"]))
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("--staged-only is not compatible with --asset-path"));
}

#[test]
fn missing_descriptor_is_precondition_failure() {
    let fx = Fixture::new();
    fs::remove_file(fx.descriptor()).unwrap();
    let ctx = fx.context(fx.env(), idle_staged(), idle_runner());

    let err = check::execute(&ctx, &cli(&[])).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn editor_failure_propagates_exit_code_and_cleans_up() {
    let fx = Fixture::new();
    let (runner, _) = recording_runner(RunStatus::Failed(3));

    let ctx = fx.context(fx.env(), idle_staged(), runner);
    let err = check::execute(&ctx, &cli(&[])).unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert_eq!(fx.leftover_temp_files(), 0);
}

#[test]
fn runner_error_is_internal_and_cleans_up() {
    let fx = Fixture::new();
    let mut runner = MockRunner::new();
    runner.expect_run().times(1).returning(|program, _| {
        Err(RuntimeError::Terminated {
            program: program.to_path_buf(),
        })
    });

    let ctx = fx.context(fx.env(), idle_staged(), runner);
    let err = check::execute(&ctx, &cli(&[])).unwrap_err();

    assert_eq!(err.exit_code(), -1);
    assert_eq!(fx.leftover_temp_files(), 0);
}

#[test]
fn engine_not_found_lists_attempts() {
    let fx = Fixture::new();
    let env = MockEnv::new().with_current_dir(fx.project.path());
    let ctx = fx.context_on(OsFamily::Other, env, idle_staged(), idle_runner());

    let err = check::execute(&ctx, &cli(&[])).unwrap_err();

    assert_eq!(err.exit_code(), -1);
    assert!(
        err.to_string()
            .contains("Could not locate Unreal Engine home for version UE_5.3")
    );
}

#[test]
fn override_file_selects_engine() {
    let fx = Fixture::new();
    fs::write(
        fx.project.path().join(".unrealengine-home"),
        fx.engine.path().display().to_string(),
    )
    .unwrap();
    let (runner, _) = recording_runner(RunStatus::Success);

    // UNREAL_HOME points nowhere; the override file wins before it is read.
    let env = MockEnv::new()
        .with_var("UNREAL_HOME", "/nonexistent/engine")
        .with_current_dir(fx.project.path());
    let ctx = fx.context(env, idle_staged(), runner);

    assert!(check::execute(&ctx, &cli(&[])).is_ok());
}

#[test]
fn missing_editor_binary_is_resolution_error() {
    let fx = Fixture::new();
    fs::remove_file(fx.editor()).unwrap();
    let ctx = fx.context(fx.env(), idle_staged(), idle_runner());

    let err = check::execute(&ctx, &cli(&[])).unwrap_err();

    assert_eq!(err.exit_code(), -1);
    assert!(err.to_string().contains("UnrealEditor-Cmd not found"));
}

#[test]
fn written_report_is_loaded() {
    let fx = Fixture::new();
    let report = fx.default_report();
    let mut runner = MockRunner::new();
    runner.expect_run().times(1).returning(move |_, _| {
        fs::write(
            &report,
            r#"{"Summary": {"AssetsScanned": 7, "Errors": 0, "Warnings": 1, "Fatals": 0},
                "Results": [{"AssetName": "BP_Door", "AssetPath": "/Game/BP_Door.BP_Door",
                             "Warnings": ["Blueprint has no description"]}]}"#,
        )
        .unwrap();
        Ok(RunStatus::Success)
    });

    let ctx = fx.context(fx.env(), idle_staged(), runner);
    let outcome = check::execute(&ctx, &cli(&[])).unwrap();

    let CheckOutcome::Completed {
        report: Some(report),
        ..
    } = &outcome
    else {
        panic!("expected a loaded report, got {outcome:?}");
    };
    assert_eq!(report.summary.assets_scanned, 7);
    assert_eq!(report.results[0].warnings.len(), 1);
}
