//! Service aggregate
//!
//! The offerings listed on the website, each with a detail block shown in
//! the service modal.

pub mod model;

pub use model::{Service, ServiceDetail};
