//! # AximoIX API
//!
//! Backend for the AximoIX marketing website: the services catalog, the
//! company profile and contact form intake.
//!
//! Reads go to a MongoDB document store and fall back to a bundled static
//! catalog whenever the store is unreachable, empty or returns unusable
//! documents. Contact submissions are always acknowledged; persistence
//! failures are logged, not surfaced.
//!
//! ## Architecture
//!
//! - **domain**: content models, the static catalog, the document store port
//!   and the value normalizer
//! - **application**: content resolution with fallback, store diagnostics
//! - **infrastructure**: MongoDB and in-memory stores, the store adapter
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime lifecycle, tracing and metrics setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError, CONFIG_PATH_ENV};

// Re-export store types for easy access
pub use infrastructure::{init_store, DatabaseConfig, DocumentStoreAdapter};

// Re-export API router
pub use interfaces::http::create_api_router;
