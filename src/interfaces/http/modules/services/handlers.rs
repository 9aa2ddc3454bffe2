//! Service catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::Service;
use crate::interfaces::http::common::{not_found, ApiError, ApiResponse};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    responses(
        (status = 200, description = "Active services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.content.list_services().await.into_inner())
}

#[utoipa::path(
    get,
    path = "/api/services/{service_id}",
    tag = "Services",
    params(("service_id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = Service),
        (status = 404, description = "Service not found", body = ApiResponse<String>)
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<Service>, ApiError> {
    state
        .content
        .get_service(&service_id)
        .await
        .map(|resolved| Json(resolved.into_inner()))
        .ok_or_else(|| not_found("Service not found"))
}
