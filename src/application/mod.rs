pub mod services;

// Re-export key types for convenience
pub use services::{
    CollectionReport, ContactReceipt, ContentService, ContentSource, DiagnosticsService,
    Resolved, StoreProbe, StoreStatus,
};
