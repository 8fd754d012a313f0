//! CLI entry point - the composition root.
//!
//! Parses arguments, wires the real collaborators through `bootstrap` and
//! turns the check outcome into the process exit code.

use clap::Parser;

use ruleranger_cli::{
    CheckOutcome, Cli, CliConfig, CliError, bootstrap, handlers, logging, presentation,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init_tracing(cli.verbose).map_err(|e| anyhow::anyhow!(e))?;

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {err}", err.label());
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let ctx = bootstrap(CliConfig::with_defaults()?);

    match handlers::check::execute(&ctx, cli)? {
        CheckOutcome::Skipped => {}
        CheckOutcome::Completed {
            report_path,
            report: Some(report),
        } => presentation::print_report(&report_path, &report, cli.verbose),
        CheckOutcome::Completed { report: None, .. } => {}
    }
    Ok(())
}
