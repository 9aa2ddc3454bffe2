//! Store diagnostics endpoint

pub mod handlers;

pub use handlers::*;
