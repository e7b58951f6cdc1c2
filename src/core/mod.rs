//! Core key-extraction and reconciliation engine.
//!
//! A run goes through two stages:
//!
//! 1. **Extraction**: the source glob is expanded (`scan`), every file is run
//!    through all extractors (`extract`) and the results are merged into one
//!    sorted, de-duplicated [`KeySet`] (`collect`).
//! 2. **Reconciliation**: each locale file is loaded (`store`) and checked or
//!    filled against the key set (`reconcile`) using dotted-key access into the
//!    nested document (`document`).
//!
//! [`CheckContext`] ties both stages together for the CLI.
//!
//! ## Module Structure
//!
//! - `collect`: Key collection across files
//! - `context`: Run orchestration (validate / generate passes)
//! - `document`: Nested locale document with dotted-key get/set
//! - `extract`: Pluggable key extractors
//! - `key_set`: The canonical key set
//! - `reconcile`: Missing-key detection and placeholder generation
//! - `scan`: Source file listing
//! - `store`: Locale file load/save

pub mod collect;
pub mod context;
pub mod document;
pub mod extract;
pub mod key_set;
pub mod reconcile;
pub mod scan;
pub mod store;

pub use context::{CheckContext, GenerateOutcome, LocaleFile, UpdatedLocale, ValidateOutcome};
pub use document::LocaleDocument;
pub use key_set::KeySet;
