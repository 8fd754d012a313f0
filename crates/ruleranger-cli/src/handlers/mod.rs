//! Command handlers.
//!
//! Handlers follow the pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<_, CliError>`
//! - Collaborators come from the context, never constructed locally
//! - Terminal output beyond progress lines lives in `presentation`

pub mod check;
