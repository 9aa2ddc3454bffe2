//! Content service
//!
//! Reads go to the document store first and fall back to the static catalog
//! when the store errors, times out, is empty, or returns documents that do
//! not decode. The fallback is all-or-nothing per call: store results are
//! never merged with catalog entries.
//!
//! Contact submissions are always acknowledged. A failed insert is logged
//! and counted, never reported to the visitor.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::domain::document::normalize_document;
use crate::domain::{
    Collection, CompanyProfile, ContactSubmission, Document, Filter, NewContactSubmission,
    Service, StaticCatalog, StoreError, COMPANY_KEY,
};
use crate::infrastructure::DocumentStoreAdapter;

/// A record type served with catalog fallback
pub trait CatalogRecord: DeserializeOwned {
    const COLLECTION: Collection;

    /// Filter applied to list queries
    fn list_filter() -> Filter {
        Filter::all()
    }

    fn is_active(&self) -> bool {
        true
    }
}

impl CatalogRecord for Service {
    const COLLECTION: Collection = Collection::Services;

    fn list_filter() -> Filter {
        Filter::all().eq("is_active", true)
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl CatalogRecord for CompanyProfile {
    const COLLECTION: Collection = Collection::Company;
}

/// Where a payload was served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Store,
    Catalog,
}

/// A resolved payload together with its source
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub data: T,
    pub source: ContentSource,
}

impl<T> Resolved<T> {
    fn store(data: T) -> Self {
        Self {
            data,
            source: ContentSource::Store,
        }
    }

    fn catalog(data: T) -> Self {
        Self {
            data,
            source: ContentSource::Catalog,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Outcome of a contact submission
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    /// The submission as acknowledged to the visitor
    pub submission: ContactSubmission,
    /// Whether the store accepted the insert. Never exposed over HTTP.
    pub persisted: bool,
}

/// Service for website content and contact intake
pub struct ContentService {
    store: Arc<DocumentStoreAdapter>,
    catalog: Arc<StaticCatalog>,
}

impl ContentService {
    pub fn new(store: Arc<DocumentStoreAdapter>, catalog: Arc<StaticCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Active services, from the store or the catalog
    pub async fn list_services(&self) -> Resolved<Vec<Service>> {
        self.resolve_list(|| self.catalog.services()).await
    }

    /// A single active service by id, or `None` if neither source has it
    pub async fn get_service(&self, id: &str) -> Option<Resolved<Service>> {
        let filter = Filter::all().eq("id", id).eq("is_active", true);
        self.resolve_single(filter, || self.catalog.service(id))
            .await
    }

    /// The company profile
    pub async fn get_company(&self) -> Option<Resolved<CompanyProfile>> {
        let filter = Filter::all().eq("id", COMPANY_KEY);
        self.resolve_single(filter, || self.catalog.company(COMPANY_KEY))
            .await
    }

    /// Record a contact submission. Always succeeds from the caller's view.
    pub async fn submit_contact(&self, input: NewContactSubmission) -> ContactReceipt {
        let submission = ContactSubmission::from_new(input);
        metrics::counter!("contact_submissions_total").increment(1);
        info!(contact_id = %submission.id, "📧 Contact form submission received");

        let persisted = match self
            .store
            .insert_one(Collection::Contacts, submission.to_document())
            .await
        {
            Ok(store_id) => {
                info!(contact_id = %submission.id, %store_id, "✅ Contact submission saved");
                true
            }
            Err(e) => {
                metrics::counter!("contact_persist_failures_total").increment(1);
                error!(
                    contact_id = %submission.id,
                    error = %e,
                    "Contact submission could not be persisted; acknowledging anyway"
                );
                false
            }
        };

        ContactReceipt {
            submission,
            persisted,
        }
    }

    async fn resolve_list<T, F>(&self, fallback: F) -> Resolved<Vec<T>>
    where
        T: CatalogRecord,
        F: FnOnce() -> Vec<T>,
    {
        let reason = match self.store.find_many(T::COLLECTION, &T::list_filter()).await {
            Ok(docs) if docs.is_empty() => "store returned no documents".to_string(),
            Ok(docs) => match decode_all::<T>(docs) {
                Ok(items) => {
                    let items: Vec<T> = items.into_iter().filter(T::is_active).collect();
                    if !items.is_empty() {
                        return Resolved::store(items);
                    }
                    "store returned no active documents".to_string()
                }
                Err(e) => format!("undecodable document: {}", e),
            },
            Err(e) => store_failure(&e),
        };

        record_fallback(T::COLLECTION, &reason);
        Resolved::catalog(fallback())
    }

    async fn resolve_single<T, F>(&self, filter: Filter, fallback: F) -> Option<Resolved<T>>
    where
        T: CatalogRecord,
        F: FnOnce() -> Option<T>,
    {
        let reason = match self.store.find_one(T::COLLECTION, &filter).await {
            Ok(Some(doc)) => match decode::<T>(doc) {
                Ok(record) if record.is_active() => return Some(Resolved::store(record)),
                Ok(_) => "stored record is inactive".to_string(),
                Err(e) => format!("undecodable document: {}", e),
            },
            Ok(None) => "not found in store".to_string(),
            Err(e) => store_failure(&e),
        };

        let found = fallback();
        if found.is_some() {
            record_fallback(T::COLLECTION, &reason);
        }
        found.map(Resolved::catalog)
    }
}

fn decode<T: DeserializeOwned>(doc: Document) -> Result<T, serde_json::Error> {
    serde_json::from_value(normalize_document(doc))
}

fn decode_all<T: DeserializeOwned>(docs: Vec<Document>) -> Result<Vec<T>, serde_json::Error> {
    docs.into_iter().map(decode).collect()
}

fn store_failure(e: &StoreError) -> String {
    match e {
        StoreError::DemoMode => debug!("Document store in demo mode"),
        other => warn!(error = %other, "Document store read failed"),
    }
    e.to_string()
}

fn record_fallback(collection: Collection, reason: &str) {
    metrics::counter!("content_fallback_total", "collection" => collection.name()).increment(1);
    debug!(%collection, reason, "Serving static catalog content");
}

// ── Tests ──────────────────────────────────────────────────────
