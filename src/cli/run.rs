/// Run the engine for an already merged configuration.
///
/// Scans the sources once, then dispatches on the run mode.
///
/// # Returns
/// - `Ok(CommandResult)` with the per-locale outcome
/// - `Err` if the run fails (e.g., invalid source glob, locale write failure)
use anyhow::Result;

use super::commands::{CommandResult, check::check, extract::extract};
use crate::{
    config::{Config, Mode},
    core::CheckContext,
};

pub fn run(config: Config) -> Result<CommandResult> {
    let ctx = CheckContext::new(config)?;

    match ctx.config.mode {
        Mode::Validate => Ok(check(&ctx)),
        Mode::Generate => extract(&ctx),
    }
}
