//! Generic form submission endpoint.

use crate::error::{ErrorResponse, HttpAppError};
use crate::extract::FormOrJson;
use crate::services::notifications;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use voiceform_core::models::FormSubmission;
use voiceform_core::ValidationError;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmissionResponse {
    pub message: String,
    pub form_data: FormSubmission,
}

fn require_field<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingField(name))
}

/// Relay a form submission to the address it carries. `email` and
/// `formName` must be present; every submission dispatches its own email,
/// resubmissions included.
#[utoipa::path(
    post,
    path = "/api/submit-form",
    tag = "submissions",
    request_body = FormSubmission,
    responses(
        (status = 201, description = "Submission relayed", body = FormSubmissionResponse),
        (status = 400, description = "Missing required field or malformed body", body = ErrorResponse),
        (status = 500, description = "Mail delivery failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, submission), fields(operation = "submit_form"))]
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    FormOrJson(submission): FormOrJson<FormSubmission>,
) -> Result<impl IntoResponse, HttpAppError> {
    require_field(&submission.email, "email")?;
    require_field(&submission.form_name, "formName")?;

    let notification = notifications::form_response(&state.config.email_user, &submission);
    state.mailer.send(&notification).await?;

    Ok((
        StatusCode::CREATED,
        Json(FormSubmissionResponse {
            message: "Form submitted successfully and email sent".to_string(),
            form_data: submission,
        }),
    ))
}
