//! HTTP REST API interfaces
//!
//! - `common`: error envelope and the validating JSON extractor
//! - `modules`: handlers per resource, request-id and metrics middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::AppState;
