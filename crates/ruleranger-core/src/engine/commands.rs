//! Editor binary resolution inside an engine home.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use super::error::EngineError;
use super::fs::{FsProvider, SystemFs};
use super::platform::OsFamily;

/// Logical engine commands that can be resolved to a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineCommand {
    /// The interactive editor, `UnrealEditor`.
    Editor,
    /// The headless editor used for commandlets, `UnrealEditor-Cmd`.
    EditorCmd,
}

impl EngineCommand {
    pub const ALL: [Self; 2] = [Self::Editor, Self::EditorCmd];

    /// The logical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Editor => "UnrealEditor",
            Self::EditorCmd => "UnrealEditor-Cmd",
        }
    }

    /// The command whose binary actually backs this one on `os`.
    ///
    /// Outside Windows there is no separate `-Cmd` binary; the app bundle's
    /// `UnrealEditor` executable runs commandlets directly. This table is the
    /// complete list of aliases.
    pub const fn alias_on(self, os: OsFamily) -> Self {
        match (self, os) {
            (Self::EditorCmd, OsFamily::MacOs | OsFamily::Other) => Self::Editor,
            (command, _) => command,
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineCommand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| EngineError::UnknownCommand(s.to_string()))
    }
}

/// Binary location for `command` relative to the engine home.
pub fn binary_layout(os: OsFamily, command: EngineCommand) -> PathBuf {
    let binaries = Path::new("Engine").join("Binaries");
    match (os.is_windows(), command.alias_on(os)) {
        (true, EngineCommand::Editor) => binaries.join("Win64").join("UnrealEditor.exe"),
        (true, EngineCommand::EditorCmd) => binaries.join("Win64").join("UnrealEditor-Cmd.exe"),
        (false, _) => binaries
            .join("Mac")
            .join("UnrealEditor.app")
            .join("Contents")
            .join("MacOS")
            .join("UnrealEditor"),
    }
}

/// Resolved binaries, keyed by command. Every path existed when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMap(BTreeMap<EngineCommand, PathBuf>);

impl CommandMap {
    pub fn get(&self, command: EngineCommand) -> Option<&Path> {
        self.0.get(&command).map(PathBuf::as_path)
    }

    /// Like [`get`](Self::get), but an error if `command` was never resolved.
    pub fn require(&self, command: EngineCommand) -> Result<&Path, EngineError> {
        self.get(command)
            .ok_or(EngineError::NotRequested(command))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EngineCommand, &Path)> {
        self.0.iter().map(|(command, path)| (*command, path.as_path()))
    }
}

/// Resolve command names to binaries under `home` for the current OS.
///
/// All-or-nothing: the first unknown or missing command fails the call.
pub fn resolve_commands<I, S>(home: &Path, names: I) -> Result<CommandMap, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_commands_with(home, names, &SystemFs, OsFamily::current())
}

/// Resolve command names with injected dependencies (for testing).
pub fn resolve_commands_with<I, S>(
    home: &Path,
    names: I,
    fs: &dyn FsProvider,
    os: OsFamily,
) -> Result<CommandMap, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolved = BTreeMap::new();

    for name in names {
        let command: EngineCommand = name.as_ref().parse()?;
        let path = home.join(binary_layout(os, command));
        if !fs.exists(&path) {
            return Err(EngineError::CommandNotFound { command, path });
        }
        debug!("Resolved {command} to {}", path.display());
        resolved.insert(command, path);
    }

    Ok(CommandMap(resolved))
}
