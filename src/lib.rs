//! i18n-check - keep locale files in sync with the message keys used in code
//!
//! i18n-check scans application source code for message keys (`intl.get('key')`,
//! `<FormattedMessage id="key" />`, `formatMessage({ id: 'key' })`), then checks
//! that every key exists in each target locale JSON file. In extract mode it
//! writes `TODO: <key>` placeholders for the missing ones into the base and
//! target files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, printing, exit status)
//! - `config`: Configuration file loading and defaults
//! - `core`: Key extraction and reconciliation engine
//! - `report`: Missing-key report aggregation

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
