//! Document store port
//!
//! The narrow contract the content service needs from a document database.
//! Filters are plain field equality; nothing else of a store's query
//! language leaks through.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::document::{normalize, Document};

/// Collections used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Services,
    Company,
    Contacts,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Services, Self::Company, Self::Contacts];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Company => "company",
            Self::Contacts => "contacts",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Conjunction of `field == value` clauses. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn clauses(&self) -> &[(String, Value)] {
        &self.clauses
    }

    /// Evaluate the filter against a document, comparing normalized values.
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses.iter().all(|(field, expected)| {
            doc.get(field)
                .map(|actual| normalize(actual.clone()) == *expected)
                .unwrap_or(false)
        })
    }
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document store is running in demo mode")]
    DemoMode,

    #[error("Document store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Document store error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations on a document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_one(&self, collection: Collection, filter: &Filter)
        -> StoreResult<Option<Document>>;
    async fn find_many(&self, collection: Collection, filter: &Filter)
        -> StoreResult<Vec<Document>>;
    /// Insert a document and return the store-assigned identifier.
    async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String>;
    async fn count(&self, collection: Collection, filter: &Filter) -> StoreResult<u64>;
    /// Total document count of any collection in the database, by name.
    /// Collections that do not exist count as zero.
    async fn count_by_name(&self, name: &str) -> StoreResult<u64>;
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
    /// Liveness probe
    async fn ping(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::StoreValue;

    #[test]
    fn collections_round_trip_names() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_name(collection.name()), Some(collection));
        }
        assert_eq!(Collection::from_name("system.views"), None);
    }

    #[test]
    fn filter_matches_on_all_clauses() {
        let mut doc = Document::new();
        doc.insert("id", StoreValue::text("1"));
        doc.insert("is_active", StoreValue::boolean(true));

        assert!(Filter::all().matches(&doc));
        assert!(Filter::all().eq("id", "1").eq("is_active", true).matches(&doc));
        assert!(!Filter::all().eq("id", "1").eq("is_active", false).matches(&doc));
        assert!(!Filter::all().eq("missing", "x").matches(&doc));
    }

    #[test]
    fn filter_compares_identifiers_by_string_form() {
        let mut doc = Document::new();
        doc.insert("_id", StoreValue::Identifier("65a1f0c2e4b0a1b2c3d4e5f6".into()));

        assert!(Filter::all()
            .eq("_id", "65a1f0c2e4b0a1b2c3d4e5f6")
            .matches(&doc));
    }
}
