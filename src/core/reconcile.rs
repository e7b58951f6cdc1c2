//! Reconciling the source key set against one locale document.
//!
//! Each document is reconciled on its own; documents are never compared with
//! each other.

use serde_json::Value;

use crate::core::{KeySet, LocaleDocument};

/// Marker put in front of the key for generated placeholder values.
pub const PLACEHOLDER_PREFIX: &str = "TODO: ";

/// Placeholder value for a missing key, e.g. `TODO: greeting.hello`.
pub fn placeholder_for(key: &str) -> String {
    format!("{}{}", PLACEHOLDER_PREFIX, key)
}

/// Keys from `keys` that `document` does not define, in key set order.
pub fn find_missing_keys(keys: &KeySet, document: &LocaleDocument) -> Vec<String> {
    keys.iter()
        .filter(|key| !document.contains_key(key))
        .map(str::to_string)
        .collect()
}

/// Add a placeholder for every key `document` does not define.
///
/// Existing values are never touched. Returns the number of keys added.
pub fn fill_missing_keys(keys: &KeySet, document: &mut LocaleDocument) -> usize {
    let mut added = 0;
    for key in keys.iter() {
        if !document.contains_key(key) {
            document.set(key, Value::String(placeholder_for(key)));
            added += 1;
        }
    }
    added
}
