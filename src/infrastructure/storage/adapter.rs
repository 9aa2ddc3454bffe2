//! Document store adapter
//!
//! Wraps a [`DocumentStore`] with the connectivity state chosen at startup
//! and a fixed per-operation timeout. In demo mode no call reaches a store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::memory::UnavailableDocumentStore;
use crate::domain::{Collection, Document, DocumentStore, Filter, StoreError, StoreResult};

/// Connectivity state of the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// A store client was constructed; individual calls may still fail
    Connected,
    /// No store client; every operation fails fast
    Demo,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Demo => "demo",
        }
    }
}

/// Shared handle to the document store
pub struct DocumentStoreAdapter {
    store: Arc<dyn DocumentStore>,
    state: ConnectionState,
    operation_timeout: Duration,
}

impl DocumentStoreAdapter {
    pub fn new(store: Arc<dyn DocumentStore>, operation_timeout: Duration) -> Self {
        Self {
            store,
            state: ConnectionState::Connected,
            operation_timeout,
        }
    }

    /// Adapter without a store. All operations return [`StoreError::DemoMode`].
    pub fn demo() -> Self {
        Self {
            store: Arc::new(UnavailableDocumentStore::new("demo mode")),
            state: ConnectionState::Demo,
            operation_timeout: Duration::ZERO,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_demo(&self) -> bool {
        self.state == ConnectionState::Demo
    }

    async fn run<T, F>(&self, operation: &'static str, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        if self.is_demo() {
            return Err(StoreError::DemoMode);
        }
        debug!(operation, "document store call");
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.operation_timeout)),
        }
    }

    pub async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Option<Document>> {
        self.run("find_one", self.store.find_one(collection, filter))
            .await
    }

    pub async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Vec<Document>> {
        self.run("find_many", self.store.find_many(collection, filter))
            .await
    }

    pub async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String> {
        self.run("insert_one", self.store.insert_one(collection, document))
            .await
    }

    pub async fn count(&self, collection: Collection, filter: &Filter) -> StoreResult<u64> {
        self.run("count", self.store.count(collection, filter)).await
    }

    pub async fn count_by_name(&self, name: &str) -> StoreResult<u64> {
        self.run("count_by_name", self.store.count_by_name(name))
            .await
    }

    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.run("list_collections", self.store.list_collections())
            .await
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.run("ping", self.store.ping()).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryDocumentStore;
    use async_trait::async_trait;

    struct SlowStore;

    #[async_trait]
    impl DocumentStore for SlowStore {
        async fn find_one(&self, _: Collection, _: &Filter) -> StoreResult<Option<Document>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }
        async fn find_many(&self, _: Collection, _: &Filter) -> StoreResult<Vec<Document>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
        async fn insert_one(&self, _: Collection, _: Document) -> StoreResult<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::new())
        }
        async fn count(&self, _: Collection, _: &Filter) -> StoreResult<u64> {
            Ok(0)
        }
        async fn count_by_name(&self, _: &str) -> StoreResult<u64> {
            Ok(0)
        }
        async fn list_collections(&self) -> StoreResult<Vec<String>> {
            Ok(Vec::new())
        }
        async fn ping(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn demo_mode_short_circuits() {
        let adapter = DocumentStoreAdapter::demo();

        assert_eq!(adapter.state(), ConnectionState::Demo);
        assert!(matches!(adapter.ping().await, Err(StoreError::DemoMode)));
        assert!(matches!(
            adapter.find_many(Collection::Services, &Filter::all()).await,
            Err(StoreError::DemoMode)
        ));
    }

    #[tokio::test]
    async fn connected_adapter_delegates() {
        let adapter = DocumentStoreAdapter::new(
            Arc::new(InMemoryDocumentStore::new()),
            Duration::from_secs(1),
        );

        assert_eq!(adapter.state().as_str(), "connected");
        assert!(adapter.ping().await.is_ok());
        assert_eq!(adapter.count(Collection::Contacts, &Filter::all()).await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_calls_time_out() {
        let adapter = DocumentStoreAdapter::new(Arc::new(SlowStore), Duration::from_millis(50));

        let result = adapter.find_many(Collection::Services, &Filter::all()).await;
        assert!(matches!(result, Err(StoreError::Timeout(d)) if d == Duration::from_millis(50)));
    }
}
