//! API root and health endpoints

pub mod handlers;

pub use handlers::*;
