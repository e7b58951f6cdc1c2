use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::LocaleDocument;

/// A warning from loading a locale file that exists but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub document: LocaleDocument,
    pub warning: Option<LoadWarning>,
}

/// Load a locale file.
///
/// A missing file is an empty document. A file that cannot be read, is not
/// valid JSON, or whose root is not an object also yields an empty document,
/// together with a [`LoadWarning`].
pub fn load_document(path: &Path) -> LoadResult {
    if !path.exists() {
        return LoadResult::default();
    }

    let warn = |error: String| LoadResult {
        document: LocaleDocument::new(),
        warning: Some(LoadWarning {
            file_path: path.display().to_string(),
            error,
        }),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return warn(e.to_string()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => match LocaleDocument::from_value(value) {
            Some(document) => LoadResult {
                document,
                warning: None,
            },
            None => warn("root is not a JSON object".to_string()),
        },
        Err(e) => warn(e.to_string()),
    }
}

/// Serialize a document with 2-space indentation and a trailing newline.
pub fn to_pretty_json(document: &LocaleDocument) -> Result<String> {
    let mut content = serde_json::to_string_pretty(document.as_map())
        .context("Failed to serialize locale document")?;
    content.push('\n');
    Ok(content)
}

/// Write a document to `path`.
///
/// The content goes to a temporary sibling file first and is renamed into
/// place, so the destination is never left half-written. Missing parent
/// directories are created.
pub fn save_document(path: &Path, document: &LocaleDocument) -> Result<()> {
    let content = to_pretty_json(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = temp_path_for(path);
    write_synced(&temp_path, &content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
