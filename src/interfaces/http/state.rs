//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use crate::application::{ContentService, DiagnosticsService};

/// State shared by every `/api` route
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub diagnostics: Arc<DiagnosticsService>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(content: Arc<ContentService>, diagnostics: Arc<DiagnosticsService>) -> Self {
        Self {
            content,
            diagnostics,
            started_at: Arc::new(Instant::now()),
        }
    }
}
