//! Form data stub endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Compatibility stub: submissions are never persisted, so there is never
/// any form data to return.
#[utoipa::path(
    get,
    path = "/api/formdata",
    tag = "submissions",
    responses(
        (status = 404, description = "No form data found")
    )
)]
pub async fn get_form_data() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "No form data found" })),
    )
}
