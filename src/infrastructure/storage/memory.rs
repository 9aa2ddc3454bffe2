//! In-memory document stores for development and testing

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Collection, Document, DocumentStore, Filter, StoreError, StoreResult, StoreValue,
};

/// Document store kept entirely in memory.
///
/// Documents keep insertion order per collection. Inserts without an `_id`
/// get a generated 24-hex-digit identifier.
pub struct InMemoryDocumentStore {
    collections: DashMap<Collection, Vec<Document>>,
    id_counter: AtomicU64,
}

impl InMemoryDocumentStore {
    /// An empty store (every collection reads back empty).
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
            id_counter: AtomicU64::new(1),
        }
    }

    /// Add a document synchronously, e.g. to prepare a fixture.
    pub fn with_document(self, collection: Collection, document: impl Into<StoreValue>) -> Self {
        if let StoreValue::Mapping(doc) = document.into() {
            self.push(collection, doc);
        }
        self
    }

    /// Snapshot of a collection's documents in insertion order.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .get(&collection)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    fn push(&self, collection: Collection, mut document: Document) -> String {
        let id = match document.get("_id") {
            Some(StoreValue::Identifier(id)) => id.clone(),
            _ => {
                let id = format!("{:024x}", self.id_counter.fetch_add(1, Ordering::SeqCst));
                document.insert("_id", StoreValue::Identifier(id.clone()));
                id
            }
        };
        self.collections.entry(collection).or_default().push(document);
        id
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn find_many(&self, collection: Collection, filter: &Filter) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String> {
        Ok(self.push(collection, document))
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> StoreResult<u64> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn count_by_name(&self, name: &str) -> StoreResult<u64> {
        Ok(Collection::from_name(name)
            .and_then(|collection| self.collections.get(&collection))
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Store that fails every operation.
///
/// Backs demo mode and stands in for an unreachable database in tests.
pub struct UnavailableDocumentStore {
    reason: String,
}

impl UnavailableDocumentStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn find_one(&self, _: Collection, _: &Filter) -> StoreResult<Option<Document>> {
        self.fail()
    }

    async fn find_many(&self, _: Collection, _: &Filter) -> StoreResult<Vec<Document>> {
        self.fail()
    }

    async fn insert_one(&self, _: Collection, _: Document) -> StoreResult<String> {
        self.fail()
    }

    async fn count(&self, _: Collection, _: &Filter) -> StoreResult<u64> {
        self.fail()
    }

    async fn count_by_name(&self, _: &str) -> StoreResult<u64> {
        self.fail()
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.fail()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.fail()
    }
}

// ── Tests ──────────────────────────────────────────────────────
