//! Company profile endpoint

pub mod handlers;

pub use handlers::*;
