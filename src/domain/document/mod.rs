//! Store-agnostic document model
//!
//! Documents read from or written to the store are expressed with a closed
//! set of value kinds. Store adapters translate their native types into
//! these kinds; [`normalize`] turns them into plain JSON.

mod normalize;

pub use normalize::{normalize, normalize_document, normalize_json};

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single value inside a stored document
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// Store-generated object identifier, as its hex form
    Identifier(String),
    /// Native store timestamp
    Timestamp(DateTime<Utc>),
    /// Leaf value: string, number, boolean, null, or a store-specific scalar
    /// already rendered as extended JSON
    Scalar(Value),
    /// Nested document
    Mapping(Document),
    /// Ordered array
    Sequence(Vec<StoreValue>),
}

impl StoreValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Value::String(value.into()))
    }

    pub fn null() -> Self {
        Self::Scalar(Value::Null)
    }

    pub fn boolean(value: bool) -> Self {
        Self::Scalar(Value::Bool(value))
    }
}

impl From<Value> for StoreValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, StoreValue::from(value)))
                    .collect(),
            ),
            Value::Array(items) => {
                Self::Sequence(items.into_iter().map(StoreValue::from).collect())
            }
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<Document> for StoreValue {
    fn from(doc: Document) -> Self {
        Self::Mapping(doc)
    }
}

/// Ordered key/value document. Key order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, StoreValue)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: StoreValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StoreValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoreValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, StoreValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, StoreValue)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

impl IntoIterator for Document {
    type Item = (String, StoreValue);
    type IntoIter = std::vec::IntoIter<(String, StoreValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_replaces_in_place() {
        let mut doc = Document::new();
        doc.insert("a", StoreValue::text("1"));
        doc.insert("b", StoreValue::text("2"));
        doc.insert("a", StoreValue::text("3"));

        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.get("a"), Some(&StoreValue::text("3")));
    }

    #[test]
    fn json_objects_become_mappings_in_order() {
        let value = StoreValue::from(json!({"z": 1, "a": [true, null], "m": {"k": "v"}}));
        let StoreValue::Mapping(doc) = value else {
            panic!("expected mapping");
        };

        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(
            doc.get("a"),
            Some(&StoreValue::Sequence(vec![
                StoreValue::boolean(true),
                StoreValue::null()
            ]))
        );
        assert!(matches!(doc.get("m"), Some(StoreValue::Mapping(_))));
    }
}
