//! Service catalog endpoints

pub mod handlers;

pub use handlers::*;
