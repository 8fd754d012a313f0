//! Process runtime for RuleRanger asset checks.
//!
//! Everything that touches the operating system beyond path lookups lives
//! here:
//! - writing the transient response file handed to the editor
//! - building the commandlet arguments
//! - running the editor and reporting its exit status
//! - asking git which files are staged

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod error;
pub mod git;
pub mod invocation;
mod response_file;
mod runner;

pub use error::{RuntimeError, RuntimeResult};
pub use git::{GitIndex, StagedFileSource};
pub use invocation::{COMMANDLET_NAME, CommandletInvocation, editor_args, log_command_execution};
pub use response_file::ResponseFile;
pub use runner::{EditorRunner, RunStatus, SystemEditorRunner};
