//! Application services

mod content;
mod diagnostics;

pub use content::{CatalogRecord, ContactReceipt, ContentService, ContentSource, Resolved};
pub use diagnostics::{CollectionReport, DiagnosticsService, StoreProbe, StoreStatus};
