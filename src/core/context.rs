use std::path::PathBuf;

use anyhow::Result;

use crate::{
    config::Config,
    core::{
        KeySet,
        collect::{SkippedFile, collect_keys},
        extract::default_extractors,
        reconcile::{fill_missing_keys, find_missing_keys},
        scan::scan_source_files,
        store::{LoadWarning, load_document, save_document},
    },
    report::{MissingKeyReport, ValidationReport},
};

/// A locale file taking part in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// File name as configured (e.g. `zh-CN.json`).
    pub name: String,
    pub path: PathBuf,
}

/// Result of a validation pass over all locale files.
#[derive(Debug, Default)]
pub struct ValidateOutcome {
    pub report: ValidationReport,
    pub warnings: Vec<LoadWarning>,
}

/// A locale file rewritten by a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedLocale {
    pub locale: LocaleFile,
    /// Number of placeholders added.
    pub added: usize,
}

/// Result of a generation pass over all locale files.
#[derive(Debug, Default)]
pub struct GenerateOutcome {
    pub updated: Vec<UpdatedLocale>,
    pub warnings: Vec<LoadWarning>,
}

/// Scanned source state shared by both run modes.
///
/// Construction lists the source files and extracts the canonical key set.
/// The key set is read-only afterwards; every locale file is then reconciled
/// against it independently.
pub struct CheckContext {
    pub config: Config,
    /// Source files matched by the source glob.
    pub files: Vec<PathBuf>,
    /// Number of source files that were read successfully.
    pub files_scanned: usize,
    pub keys: KeySet,
    /// Source files that could not be read (glob walk or file read).
    pub skipped_files: Vec<SkippedFile>,
}

impl CheckContext {
    pub fn new(config: Config) -> Result<Self> {
        let scan = scan_source_files(&config.source)?;
        let collected = collect_keys(&scan.files, &default_extractors());

        let mut skipped_files = scan.skipped;
        skipped_files.extend(collected.skipped);

        Ok(Self {
            config,
            files: scan.files,
            files_scanned: collected.files_scanned,
            keys: collected.keys,
            skipped_files,
        })
    }

    /// Build a context from an already extracted key set.
    pub fn with_keys(config: Config, keys: KeySet) -> Self {
        Self {
            config,
            files: Vec::new(),
            files_scanned: 0,
            keys,
            skipped_files: Vec::new(),
        }
    }

    pub fn base_file(&self) -> LocaleFile {
        LocaleFile {
            name: self.config.base.clone(),
            path: self.config.base_path(),
        }
    }

    /// Each configured target, in order and as given.
    pub fn target_files(&self) -> Vec<LocaleFile> {
        self.config
            .targets
            .iter()
            .map(|target| LocaleFile {
                name: target.clone(),
                path: self.config.target_path(target),
            })
            .collect()
    }

    /// The base locale followed by every target.
    pub fn locale_files(&self) -> Vec<LocaleFile> {
        let mut files = vec![self.base_file()];
        files.extend(self.target_files());
        files
    }

    /// Report the keys missing from each target locale file. Nothing is written.
    ///
    /// The base file is loaded only so a parse failure is still surfaced; its
    /// own gaps never count as problems.
    pub fn validate(&self) -> ValidateOutcome {
        let mut outcome = ValidateOutcome::default();
        outcome
            .warnings
            .extend(load_document(&self.base_file().path).warning);

        for locale in self.target_files() {
            let loaded = load_document(&locale.path);
            outcome.warnings.extend(loaded.warning);

            outcome.report.push(MissingKeyReport {
                missing_keys: find_missing_keys(&self.keys, &loaded.document),
                locale: locale.name,
            });
        }

        outcome
    }

    /// Add placeholders for missing keys to each locale file and write it back.
    ///
    /// Every locale file is rewritten, even when nothing was added. The first
    /// write failure aborts the pass.
    pub fn generate(&self) -> Result<GenerateOutcome> {
        let mut outcome = GenerateOutcome::default();

        for locale in self.locale_files() {
            let loaded = load_document(&locale.path);
            outcome.warnings.extend(loaded.warning);

            let mut document = loaded.document;
            let added = fill_missing_keys(&self.keys, &mut document);
            save_document(&locale.path, &document)?;

            outcome.updated.push(UpdatedLocale { locale, added });
        }

        Ok(outcome)
    }
}
