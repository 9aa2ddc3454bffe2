//! Contact form handler

use axum::{extract::State, Json};

use crate::domain::{ContactSubmission, NewContactSubmission};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::AppState;

/// Accept a contact form submission.
///
/// The submission is acknowledged even when it could not be stored.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = NewContactSubmission,
    responses(
        (status = 200, description = "Submission received", body = ContactSubmission),
        (status = 400, description = "Malformed JSON", body = ApiResponse<String>),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<NewContactSubmission>,
) -> Json<ContactSubmission> {
    Json(state.content.submit_contact(form).await.submission)
}
