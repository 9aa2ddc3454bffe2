//! Document store adapter and in-memory store implementations

mod adapter;
mod memory;

pub use adapter::{ConnectionState, DocumentStoreAdapter};
pub use memory::{InMemoryDocumentStore, UnavailableDocumentStore};
