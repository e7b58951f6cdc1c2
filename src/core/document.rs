//! Nested locale document addressed by dotted keys.
//!
//! A locale file is a JSON object whose nested objects are namespaces:
//! `{"greeting": {"hello": "Hi"}}` defines the key `greeting.hello`.
//! Only JSON objects are descended into; strings, numbers, booleans, null and
//! arrays are all leaves.

use serde_json::{Map, Value};

/// An in-memory locale file. The root is always a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleDocument {
    root: Map<String, Value>,
}

impl LocaleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed JSON value. Returns `None` if the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a dotted key.
    ///
    /// Returns `None` when any segment is absent or an intermediate segment is
    /// not an object. A key explicitly set to JSON `null` yields `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Assign `value` at a dotted key, creating intermediate objects.
    ///
    /// An intermediate segment holding a non-object value is replaced by an
    /// empty object, discarding the old value. The final segment is always
    /// overwritten.
    pub fn set(&mut self, key: &str, value: Value) {
        let _ = self.set_path(key, value);
    }

    fn set_path(&mut self, key: &str, value: Value) -> Option<()> {
        let mut segments: Vec<&str> = key.split('.').collect();
        let last = segments.pop()?;

        let mut current = &mut self.root;
        for segment in segments {
            let slot = current
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = slot.as_object_mut()?;
        }

        current.insert(last.to_string(), value);
        Some(())
    }
}
