use std::{collections::BTreeSet, path::PathBuf};

use anyhow::{Context, Result};
use glob::glob;

use crate::core::collect::SkippedFile;

/// Result of expanding the source glob.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Regular files matched by the pattern, sorted and de-duplicated.
    pub files: Vec<PathBuf>,
    /// Entries the glob walk could not access.
    pub skipped: Vec<SkippedFile>,
}

/// List the source files matched by `pattern`.
///
/// Supports `{a,b}` alternatives on top of the `glob` crate syntax, so the
/// default `src/**/*.{js,jsx,ts,tsx}` works as expected.
pub fn scan_source_files(pattern: &str) -> Result<ScanResult> {
    let mut files = BTreeSet::new();
    let mut skipped = Vec::new();

    for expanded in expand_braces(pattern) {
        let entries = glob(&expanded)
            .with_context(|| format!("Invalid source glob pattern: \"{}\"", pattern))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    files.insert(path);
                }
                Ok(_) => {}
                Err(e) => skipped.push(SkippedFile::new(e.path(), e.error())),
            }
        }
    }

    Ok(ScanResult {
        files: files.into_iter().collect(),
        skipped,
    })
}

/// Expand shell-style brace alternatives: `a.{js,ts}` -> `a.js`, `a.ts`.
///
/// Nested groups are expanded recursively. A pattern with an unbalanced `{`
/// is returned unchanged.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut close = None;
    let mut separators = Vec::new();
    for (offset, c) in pattern[open..].char_indices() {
        let index = open + offset;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            ',' if depth == 1 => separators.push(index),
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    let mut bounds = Vec::with_capacity(separators.len() + 2);
    bounds.push(open);
    bounds.extend(separators);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| {
            let alternative = &pattern[w[0] + 1..w[1]];
            expand_braces(&format!("{}{}{}", prefix, alternative, suffix))
        })
        .collect()
}
