//! Report formatting and printing utilities.
//!
//! Results go to stdout, diagnostics (warnings, notes) to stderr.
//! Separate from core logic to allow i18n-check to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary};
use crate::{core::UpdatedLocale, report::ValidationReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: diagnostics to stderr, results to stdout.
pub fn print(result: &CommandResult, quiet: bool, verbose: bool) {
    print_diagnostics_to(result, quiet, verbose, &mut io::stderr().lock());
    print_result_to(result, quiet, &mut io::stdout().lock());
}

/// Print warnings and notes to a custom writer.
///
/// Locale parse warnings are always shown. Skipped source files and scan
/// statistics only in verbose mode.
pub fn print_diagnostics_to<W: Write>(
    result: &CommandResult,
    quiet: bool,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        for skipped in &result.skipped_files {
            let _ = writeln!(
                writer,
                "{} Skipped unreadable file {}: {}",
                "warning:".bold().yellow(),
                skipped.file_path,
                skipped.error
            );
        }
        let _ = writeln!(
            writer,
            "Found {} i18n {} in {} source {}",
            result.key_count,
            plural(result.key_count, "key", "keys"),
            result.source_files_checked,
            plural(result.source_files_checked, "file", "files")
        );
    }

    for warning in &result.load_warnings {
        let _ = writeln!(
            writer,
            "{} Failed to parse JSON: {} ({})",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }

    if result.key_count == 0 && !quiet {
        let _ = writeln!(
            writer,
            "{} No i18n keys found in source.",
            "warning:".bold().yellow()
        );
    }
}

/// Print the per-locale outcome to a custom writer.
pub fn print_result_to<W: Write>(result: &CommandResult, quiet: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(report) => {
            print_validation(report, result.source_files_checked, quiet, writer)
        }
        CommandSummary::Extract(updated) => print_updated(updated, quiet, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_validation<W: Write>(
    validation: &ValidationReport,
    source_files: usize,
    quiet: bool,
    writer: &mut W,
) {
    for report in &validation.reports {
        if report.is_clean() {
            if !quiet {
                let _ = writeln!(
                    writer,
                    "{} No missing keys in {}",
                    SUCCESS_MARK.green(),
                    report.locale
                );
            }
            continue;
        }

        let count = report.missing_keys.len();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Missing {} {} in {}:",
                count,
                plural(count, "key", "keys"),
                report.locale
            )
            .red()
        );
        for key in &report.missing_keys {
            let _ = writeln!(writer, "  {}", key.as_str().yellow());
        }
    }

    if quiet {
        return;
    }

    let problems = validation.problem_count();
    let locale_files = validation.reports.len();
    if problems > 0 {
        let failing = validation.failing_locale_count();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found {} missing {} in {} locale {}",
                problems,
                plural(problems, "key", "keys"),
                failing,
                plural(failing, "file", "files")
            )
            .bold()
            .red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {}, {} locale {} - no missing keys",
                source_files,
                plural(source_files, "file", "files"),
                locale_files,
                plural(locale_files, "file", "files")
            )
            .green()
        );
    }
}

fn print_updated<W: Write>(updated: &[UpdatedLocale], quiet: bool, writer: &mut W) {
    if quiet {
        return;
    }

    for entry in updated {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Updated {} with {} new {}",
                entry.locale.path.display(),
                entry.added,
                plural(entry.added, "key", "keys")
            )
            .green()
        );
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
