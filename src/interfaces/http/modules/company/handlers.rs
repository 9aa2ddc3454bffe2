//! Company profile handler

use axum::{extract::State, Json};

use crate::domain::CompanyProfile;
use crate::interfaces::http::common::{not_found, ApiError, ApiResponse};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/company",
    tag = "Company",
    responses(
        (status = 200, description = "Company profile", body = CompanyProfile),
        (status = 404, description = "Company information not found", body = ApiResponse<String>)
    )
)]
pub async fn get_company(State(state): State<AppState>) -> Result<Json<CompanyProfile>, ApiError> {
    state
        .content
        .get_company()
        .await
        .map(|resolved| Json(resolved.into_inner()))
        .ok_or_else(|| not_found("Company information not found"))
}
