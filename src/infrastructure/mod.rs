//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_store, DatabaseConfig, MongoDocumentStore};
pub use storage::{
    ConnectionState, DocumentStoreAdapter, InMemoryDocumentStore, UnavailableDocumentStore,
};
