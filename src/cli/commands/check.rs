use super::{CommandResult, CommandSummary};
use crate::core::CheckContext;

/// Validate every locale file against the extracted key set.
pub fn check(ctx: &CheckContext) -> CommandResult {
    let outcome = ctx.validate();

    CommandResult {
        summary: CommandSummary::Check(outcome.report),
        key_count: ctx.keys.len(),
        source_files_checked: ctx.files_scanned,
        skipped_files: ctx.skipped_files.clone(),
        load_warnings: outcome.warnings,
    }
}
