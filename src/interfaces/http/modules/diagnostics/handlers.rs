//! Collection diagnostics handler

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::AppState;

/// Collections and their document counts, or the failure that prevented
/// listing them. Served with 200 either way.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CollectionsResponse {
    Active {
        /// Document count per collection
        collections: BTreeMap<String, u64>,
        database: String,
        connection: String,
    },
    Failed {
        error: String,
        connection: String,
    },
}

#[utoipa::path(
    get,
    path = "/api/debug/collections",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Collections with document counts", body = CollectionsResponse)
    )
)]
pub async fn list_collections(State(state): State<AppState>) -> Json<CollectionsResponse> {
    let response = match state.diagnostics.collection_counts().await {
        Ok(report) => CollectionsResponse::Active {
            collections: report.collections,
            database: report.database,
            connection: "active".to_string(),
        },
        Err(e) => CollectionsResponse::Failed {
            error: e.to_string(),
            connection: "failed".to_string(),
        },
    };
    Json(response)
}
