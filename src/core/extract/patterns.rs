use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use super::KeyExtractor;

// intl.get('key') / get("key") / get(`key`)
static DIRECT_ACCESSOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bget\(\s*['"`]([^'"`]+?)['"`]\s*\)"#).unwrap());

// <FormattedMessage id="key" ... />, any component tag (upper-case first letter)
static MESSAGE_ELEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[A-Z][\w.]*[^>]*?\sid\s*=\s*['"`]([^'"`]+)['"`]"#).unwrap()
});

// formatMessage({ id: 'key', defaultMessage: '...' })
static STRUCTURED_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"formatMessage\(\s*\{[^}]*?\bid\s*:\s*['"`]([^'"`]+)['"`][^}]*\}\s*\)"#)
        .unwrap()
});

/// `get(<quoted>)` accessor calls, e.g. `intl.get('greeting.hello')`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAccessorCall;

impl KeyExtractor for DirectAccessorCall {
    fn name(&self) -> &'static str {
        "accessor-call"
    }

    fn extract(&self, source: &str) -> Vec<String> {
        captures_in_order(&DIRECT_ACCESSOR_REGEX, source)
    }
}

/// Component elements carrying an `id` attribute, e.g. `<FormattedMessage id="a.b" />`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageElement;

impl KeyExtractor for MessageElement {
    fn name(&self) -> &'static str {
        "message-element"
    }

    fn extract(&self, source: &str) -> Vec<String> {
        captures_in_order(&MESSAGE_ELEMENT_REGEX, source)
    }
}

/// `formatMessage({ id: <quoted> })` calls with an object literal descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredMessageCall;

impl KeyExtractor for StructuredMessageCall {
    fn name(&self) -> &'static str {
        "format-message"
    }

    fn extract(&self, source: &str) -> Vec<String> {
        captures_in_order(&STRUCTURED_CALL_REGEX, source)
    }
}

/// Collect capture group 1 of every non-overlapping match, keeping the first
/// occurrence of each key. Captures with an empty dot segment are dropped.
fn captures_in_order(regex: &Regex, source: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    regex
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .filter(|key| is_well_formed(key))
        .filter(|key| seen.insert(*key))
        .map(str::to_string)
        .collect()
}

fn is_well_formed(key: &str) -> bool {
    key.split('.').all(|segment| !segment.is_empty())
}
