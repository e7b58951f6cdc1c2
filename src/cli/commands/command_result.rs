use crate::{
    cli::ExitStatus,
    core::{UpdatedLocale, collect::SkippedFile, store::LoadWarning},
    report::ValidationReport,
};

#[derive(Debug)]
pub enum CommandSummary {
    /// Validation: missing keys per locale file.
    Check(ValidationReport),
    /// Generation: locale files that were rewritten.
    Extract(Vec<UpdatedLocale>),
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of distinct keys found in source code.
    pub key_count: usize,
    /// Number of source files that were read and scanned.
    pub source_files_checked: usize,
    /// Source files that could not be read.
    pub skipped_files: Vec<SkippedFile>,
    /// Locale files that could not be parsed and were treated as empty.
    pub load_warnings: Vec<LoadWarning>,
}

impl CommandResult {
    /// Missing keys across all locale files. Always 0 for extract runs.
    pub fn problem_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Check(report) => report.problem_count(),
            CommandSummary::Extract(_) => 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.problem_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
