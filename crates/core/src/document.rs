use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable document identifier: lowercase hex SHA-256 of the content.
pub type DocId = String;

/// A document is a text body plus a metadata map and a content-derived id.
///
/// The id is deterministic: two documents with identical content share an
/// id regardless of metadata. Documents are treated as immutable values;
/// derive a new one instead of mutating content in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: DocId,
    pub content: String,
    pub meta: HashMap<String, MetaValue>,
}

/// Typed metadata values — source data arrives as strings but we preserve
/// type info where the loader knows better.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MetaValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl MetaValue {
    /// Extract as string, returning None for non-text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract as integer, returning None for non-integer values.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetaValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl Document {
    /// Create a document from content, computing its id.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let id = content_id(&content);
        Self {
            id,
            content,
            meta: HashMap::new(),
        }
    }

    /// Create a document from content with an initial metadata map.
    pub fn with_meta(content: impl Into<String>, meta: HashMap<String, MetaValue>) -> Self {
        let mut doc = Self::new(content);
        doc.meta = meta;
        doc
    }

    /// Look up a metadata value by key.
    pub fn meta_value(&self, key: &str) -> Option<&MetaValue> {
        self.meta.get(key)
    }
}

/// Compute the content-derived id for a piece of text.
pub fn content_id(content: &str) -> DocId {
    let digest = Sha256::digest(content.as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_deterministic() {
        let a = Document::new("same text");
        let b = Document::new("same text");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn id_changes_with_content() {
        let a = Document::new("one");
        let b = Document::new("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn id_ignores_meta() {
        let mut meta = HashMap::new();
        meta.insert("source".to_string(), MetaValue::Text("a.md".to_string()));
        let a = Document::with_meta("body", meta);
        let b = Document::new("body");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn id_is_hex_sha256() {
        let doc = Document::new("");
        assert_eq!(doc.id.len(), 64);
        assert!(doc.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn meta_value_accessors() {
        assert_eq!(MetaValue::Text("x".into()).as_str(), Some("x"));
        assert_eq!(MetaValue::Integer(3).as_int(), Some(3));
        assert_eq!(MetaValue::Integer(3).as_str(), None);
        assert_eq!(MetaValue::Null.as_int(), None);
    }
}
