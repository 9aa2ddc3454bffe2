//! Store diagnostics
//!
//! Liveness and per-collection counts for operators. Nothing here falls back
//! to static content: the point is to report what the store is doing.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use crate::domain::StoreResult;
use crate::infrastructure::{ConnectionState, DocumentStoreAdapter};

/// Store reachability as seen by a ping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Connected,
    Disconnected,
    Demo,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Demo => "demo",
        }
    }
}

/// Result of a store ping
#[derive(Debug, Clone)]
pub struct StoreProbe {
    pub status: StoreStatus,
    pub latency_ms: Option<u64>,
}

impl StoreProbe {
    pub fn is_connected(&self) -> bool {
        self.status == StoreStatus::Connected
    }
}

/// Document counts per collection
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub database: String,
    pub collections: BTreeMap<String, u64>,
}

pub struct DiagnosticsService {
    store: Arc<DocumentStoreAdapter>,
    database: String,
}

impl DiagnosticsService {
    pub fn new(store: Arc<DocumentStoreAdapter>, database: impl Into<String>) -> Self {
        Self {
            store,
            database: database.into(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Ping the store and measure the round trip
    pub async fn probe(&self) -> StoreProbe {
        if self.store.state() == ConnectionState::Demo {
            return StoreProbe {
                status: StoreStatus::Demo,
                latency_ms: None,
            };
        }

        let started = Instant::now();
        match self.store.ping().await {
            Ok(()) => StoreProbe {
                status: StoreStatus::Connected,
                latency_ms: Some(started.elapsed().as_millis() as u64),
            },
            Err(e) => {
                warn!(error = %e, "Document store ping failed");
                StoreProbe {
                    status: StoreStatus::Disconnected,
                    latency_ms: None,
                }
            }
        }
    }

    /// List every collection in the database with its document count
    pub async fn collection_counts(&self) -> StoreResult<CollectionReport> {
        let names = self.store.list_collections().await?;

        let mut collections = BTreeMap::new();
        for name in names {
            let count = self.store.count_by_name(&name).await?;
            collections.insert(name, count);
        }

        Ok(CollectionReport {
            database: self.database.clone(),
            collections,
        })
    }
}
