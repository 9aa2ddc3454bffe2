//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::AppState;

/// API root response
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    /// `connected`, `disconnected` or `demo`
    pub database: String,
    pub version: String,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/",
    tag = "Health",
    responses(
        (status = 200, description = "API is running", body = RootResponse)
    )
)]
pub async fn api_root(State(state): State<AppState>) -> Json<RootResponse> {
    let probe = state.diagnostics.probe().await;

    Json(RootResponse {
        message: "AximoIX API is running".to_string(),
        status: "healthy".to_string(),
        database: probe.status.as_str().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Always 200: reads are served from the static catalog while the store is
/// down, so a missing database only degrades the service.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.started_at.elapsed().as_secs();
    let probe = state.diagnostics.probe().await;

    let overall_status = if probe.is_connected() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: overall_status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        database: ComponentHealth {
            status: probe.status.as_str().to_string(),
            latency_ms: probe.latency_ms,
        },
    })
}
