//! Key collection across source files.
//!
//! Reads every scanned file, runs all extractors over its text and merges the
//! results into one [`KeySet`]. A file that cannot be read is skipped and
//! recorded; it never aborts the scan.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{KeySet, extract::KeyExtractor};

/// A source file that was skipped during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_path: String,
    pub error: String,
}

impl SkippedFile {
    pub fn new(path: &Path, error: impl ToString) -> Self {
        Self {
            file_path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectResult {
    pub keys: KeySet,
    /// Number of files that were read and scanned.
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Run every extractor over one source text.
pub fn extract_keys(source: &str, extractors: &[Box<dyn KeyExtractor>]) -> Vec<String> {
    extractors
        .iter()
        .flat_map(|extractor| extractor.extract(source))
        .collect()
}

/// Collect keys from in-memory source texts.
pub fn collect_from_sources<'a>(
    sources: impl IntoIterator<Item = &'a str>,
    extractors: &[Box<dyn KeyExtractor>],
) -> KeySet {
    let mut keys = KeySet::new();
    for source in sources {
        keys.extend(extract_keys(source, extractors));
    }
    keys
}

/// Collect keys from files on disk.
///
/// Unreadable files (permissions, files removed since listing, non-UTF-8
/// content) are skipped and reported in [`CollectResult::skipped`].
pub fn collect_keys(files: &[PathBuf], extractors: &[Box<dyn KeyExtractor>]) -> CollectResult {
    let mut result = CollectResult::default();

    for path in files {
        match fs::read_to_string(path) {
            Ok(source) => {
                result.files_scanned += 1;
                result.keys.extend(extract_keys(&source, extractors));
            }
            Err(e) => result.skipped.push(SkippedFile::new(path, e)),
        }
    }

    result
}
