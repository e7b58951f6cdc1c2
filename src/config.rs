use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::scan::expand_braces;

pub const CONFIG_FILE_NAME: &str = ".i18ncheckrc.json";

/// What a run does with the locale files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Report missing keys without touching any file.
    #[default]
    Validate,
    /// Write placeholders for missing keys into every locale file.
    Generate,
}

/// Everything a run needs, built once by the CLI and passed down.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Glob for source files to scan.
    #[serde(default = "default_source")]
    pub source: String,
    /// Directory holding the locale files.
    #[serde(default = "default_locales")]
    pub locales: String,
    /// Base locale file name inside `locales`.
    #[serde(default = "default_base")]
    pub base: String,
    /// Target locale file names inside `locales`.
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
    #[serde(skip)]
    pub mode: Mode,
    #[serde(skip)]
    pub quiet: bool,
    #[serde(skip)]
    pub verbose: bool,
}

fn default_source() -> String {
    "src/**/*.{js,jsx,ts,tsx}".to_string()
}

fn default_locales() -> String {
    "src/locales".to_string()
}

fn default_base() -> String {
    "en-US.json".to_string()
}

fn default_targets() -> Vec<String> {
    vec!["zh-CN.json".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            locales: default_locales(),
            base: default_base(),
            targets: default_targets(),
            mode: Mode::default(),
            quiet: false,
            verbose: false,
        }
    }
}

/// Split a comma-separated target list, trimming entries and dropping empty ones.
pub fn parse_targets(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the base file name is empty or the source glob is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.base.trim().is_empty() {
            bail!("Base locale file name must not be empty");
        }

        for pattern in expand_braces(&self.source) {
            Pattern::new(&pattern).with_context(|| {
                format!("Invalid glob pattern in 'source': \"{}\"", self.source)
            })?;
        }

        Ok(())
    }

    pub fn base_path(&self) -> PathBuf {
        Path::new(&self.locales).join(&self.base)
    }

    pub fn target_path(&self, target: &str) -> PathBuf {
        Path::new(&self.locales).join(target)
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
