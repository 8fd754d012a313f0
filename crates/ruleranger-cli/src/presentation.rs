//! Terminal output for the check command.
//!
//! Format-only: nothing here decides whether a run passed.

use std::fmt::{Display, Write};
use std::path::Path;

use ruleranger_core::ValidationReport;

/// Print a ` -> label: value` progress line.
pub fn print_step(label: &str, value: impl Display) {
    println!(" -> {label}: {value}");
}

/// Render the report summary, listing per-asset messages when `detailed`.
pub fn format_report(report_path: &Path, report: &ValidationReport, detailed: bool) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "RuleRanger report: {}", report_path.display());
    let _ = writeln!(
        out,
        "  Assets scanned: {}  Errors: {}  Warnings: {}  Fatals: {}",
        summary.assets_scanned, summary.errors, summary.warnings, summary.fatals
    );

    if detailed {
        for result in &report.results {
            let _ = writeln!(out, "  {}", result.asset_path);
            for message in &result.errors {
                let _ = writeln!(out, "    error: {message}");
            }
            for message in &result.warnings {
                let _ = writeln!(out, "    warning: {message}");
            }
        }
    }

    out
}

/// Print the report summary to stdout.
pub fn print_report(report_path: &Path, report: &ValidationReport, detailed: bool) {
    print!("{}", format_report(report_path, report, detailed));
}
