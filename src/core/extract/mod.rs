//! Key extraction from source text.
//!
//! Every lexical convention for referencing a message key is a separate
//! [`KeyExtractor`]. The collector runs all registered extractors over each
//! file and unions their output, so supporting a new convention means adding
//! another extractor to [`default_extractors`].
//!
//! ## Module Structure
//!
//! - `patterns`: The built-in regex extractors

mod patterns;

pub use patterns::{DirectAccessorCall, MessageElement, StructuredMessageCall};

/// Extracts raw message keys from one source text.
pub trait KeyExtractor {
    /// Short name shown in verbose diagnostics.
    fn name(&self) -> &'static str;

    /// Return the keys found in `source`, in order of first occurrence.
    ///
    /// Must never fail: text that does not match is ignored.
    fn extract(&self, source: &str) -> Vec<String>;
}

/// The extractors applied to every scanned file.
pub fn default_extractors() -> Vec<Box<dyn KeyExtractor>> {
    vec![
        Box::new(DirectAccessorCall),
        Box::new(MessageElement),
        Box::new(StructuredMessageCall),
    ]
}
