//! Contact aggregate
//!
//! Contact-form submissions and the validated input they are created from.

pub mod model;

pub use model::{ContactStatus, ContactSubmission, NewContactSubmission};
