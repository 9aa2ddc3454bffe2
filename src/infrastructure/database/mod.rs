pub mod mongo;

pub use mongo::MongoDocumentStore;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::StoreResult;
use crate::infrastructure::storage::DocumentStoreAdapter;

/// Default connection string when none is configured
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "aximoix";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string (e.g., "mongodb://localhost:27017" or an Atlas SRV URL)
    pub url: String,
    /// Database name
    pub name: String,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
    /// Upper bound for any single store operation issued by the service
    pub operation_timeout: Duration,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub max_idle_time: Duration,
    /// Run without a store instead of failing when the client cannot be built
    pub demo_mode_on_failure: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            name: DEFAULT_DATABASE_NAME.to_string(),
            connect_timeout: Duration::from_secs(30),
            server_selection_timeout: Duration::from_secs(30),
            operation_timeout: Duration::from_secs(30),
            max_pool_size: 50,
            min_pool_size: 10,
            max_idle_time: Duration::from_secs(30),
            demo_mode_on_failure: true,
        }
    }
}

impl DatabaseConfig {
    /// Connection string with any credentials masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***@{}", &self.url[..scheme_end], &self.url[at + 1..])
            }
            _ => self.url.clone(),
        }
    }
}

/// Build the document store adapter.
///
/// Failure to construct the client is fatal unless `demo_mode_on_failure`
/// is set, in which case a demo-mode adapter is returned. An unreachable
/// server is only logged: the client reconnects lazily and reads fall back
/// to static content in the meantime.
pub async fn init_store(config: &DatabaseConfig) -> StoreResult<DocumentStoreAdapter> {
    info!(url = %config.redacted_url(), database = %config.name, "Connecting to document store");

    let store = match MongoDocumentStore::connect(config).await {
        Ok(store) => store,
        Err(e) if config.demo_mode_on_failure => {
            warn!(error = %e, "Document store client could not be created, running in demo mode");
            return Ok(DocumentStoreAdapter::demo());
        }
        Err(e) => return Err(e),
    };

    let adapter = DocumentStoreAdapter::new(Arc::new(store), config.operation_timeout);
    match adapter.ping().await {
        Ok(()) => info!(database = %config.name, "✅ Document store connection successful"),
        Err(e) => warn!(
            error = %e,
            "Document store not reachable yet; serving static content until it is"
        ),
    }

    Ok(adapter)
}
