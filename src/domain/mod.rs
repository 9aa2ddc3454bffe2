pub mod catalog;
pub mod company;
pub mod contact;
pub mod document;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use catalog::StaticCatalog;
pub use company::{CompanyAbout, CompanyContact, CompanyProfile, COMPANY_KEY};
pub use contact::{ContactStatus, ContactSubmission, NewContactSubmission};
pub use document::{Document, StoreValue};
pub use service::{Service, ServiceDetail};
pub use store::{Collection, DocumentStore, Filter, StoreError, StoreResult};
