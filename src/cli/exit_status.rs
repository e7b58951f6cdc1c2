use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): No missing keys, or all locale files were written
/// - `Failure` (2): Validation found missing keys
/// - `Error` (1): The run failed (invalid config, write failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed and nothing is missing.
    Success,
    /// Validation completed but keys are missing.
    Failure,
    /// Run failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(2),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
