//! Contact form endpoint

pub mod handlers;

pub use handlers::*;
