//! CLI argument definitions using clap.
//!
//! Every option is optional so that values from `.i18ncheckrc.json` (or the
//! built-in defaults) are only overridden when given on the command line.

use clap::Parser;

use crate::config::{Config, Mode, parse_targets};

#[derive(Debug, Parser)]
#[command(name = "i18n-check", author, version, about, long_about = None)]
pub struct Arguments {
    /// Source code glob to scan [default: src/**/*.{js,jsx,ts,tsx}]
    #[arg(short, long, value_name = "GLOB")]
    pub source: Option<String>,

    /// Locales directory [default: src/locales]
    #[arg(short, long, value_name = "DIR")]
    pub locales: Option<String>,

    /// Base locale file (e.g., en-US.json) [default: en-US.json]
    #[arg(short, long, value_name = "FILE")]
    pub base: Option<String>,

    /// Target locale files (comma-separated) [default: zh-CN.json]
    #[arg(short, long, value_name = "FILES")]
    pub targets: Option<String>,

    /// Extract keys and generate/update locale files
    #[arg(short, long)]
    pub extract: bool,

    /// Only return exit code, minimal output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Apply command-line values on top of a loaded configuration.
    pub fn apply_to(self, mut config: Config) -> Config {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(locales) = self.locales {
            config.locales = locales;
        }
        if let Some(base) = self.base {
            config.base = base;
        }
        if let Some(targets) = self.targets {
            config.targets = parse_targets(&targets);
        }
        config.mode = if self.extract {
            Mode::Generate
        } else {
            Mode::Validate
        };
        config.quiet = self.quiet;
        config.verbose = self.verbose;
        config
    }
}
