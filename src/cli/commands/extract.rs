use anyhow::{Ok, Result};

use super::{CommandResult, CommandSummary};
use crate::core::CheckContext;

/// Write placeholders for missing keys into the base and every target locale file.
pub fn extract(ctx: &CheckContext) -> Result<CommandResult> {
    let outcome = ctx.generate()?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(outcome.updated),
        key_count: ctx.keys.len(),
        source_files_checked: ctx.files_scanned,
        skipped_files: ctx.skipped_files.clone(),
        load_warnings: outcome.warnings,
    })
}
