//! Command-line interface layer.
//!
//! Merges the configuration (CLI args > `.i18ncheckrc.json` > defaults), runs
//! the engine once and turns the result into printed output and an exit status.

use std::env;

use anyhow::{Context, Result};

use crate::config::{CONFIG_FILE_NAME, load_config};

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;

    let config = args.apply_to(loaded.config);
    config.validate()?;

    let (quiet, verbose) = (config.quiet, config.verbose);
    if verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let result = run::run(config)?;
    report::print(&result, quiet, verbose);

    Ok(result.exit_status())
}
