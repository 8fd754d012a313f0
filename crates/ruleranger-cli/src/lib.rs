//! RuleRanger asset check CLI.
//!
//! The binary `ruleranger-check` runs from a project directory, locates the
//! Unreal Engine the project was built with and runs the RuleRanger
//! commandlet over the project's content.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by tests/
#[cfg(test)]
use mockall as _;

// Used by main.rs
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::CliError;
pub use handlers::check::CheckOutcome;
pub use parser::Cli;
