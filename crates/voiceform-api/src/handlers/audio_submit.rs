//! Audio submission endpoint.

use crate::error::{error_response_with_headers, ErrorResponse, HttpAppError};
use crate::services::{notifications, upload};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use voiceform_core::models::AudioFormData;
use voiceform_core::{AppError, AudioValidator, ValidationError};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AudioSubmissionResponse {
    pub message: String,
    pub form_data: AudioFormData,
}

/// Handle an audio submission: validate and persist the uploaded file,
/// then dispatch the confirmation email to the submitter with the file
/// attached. The stored file stays on disk whatever the dispatch outcome.
///
/// The 400 responses echo the request headers (`{message, headers}`), the
/// shape this endpoint's clients have always received.
#[utoipa::path(
    post,
    path = "/api/submit-audio",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Submission accepted and confirmation email sent", body = AudioSubmissionResponse),
        (status = 400, description = "Invalid or missing audio file"),
        (status = 500, description = "Storage or mail delivery failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, headers, multipart), fields(operation = "submit_audio"))]
pub async fn submit_audio(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let (audio, fields) = match upload::extract_audio_form(multipart).await {
        Ok(parsed) => parsed,
        Err(e) => return error_response_with_headers(HttpAppError::from(e), &headers),
    };

    let Some(part) = audio else {
        return error_response_with_headers(
            HttpAppError::from(AppError::from(ValidationError::MissingFile)),
            &headers,
        );
    };

    let validator = AudioValidator::new(state.config.max_audio_size_bytes);
    if let Err(e) = validator.validate(&part.content_type, part.data.len()) {
        return error_response_with_headers(HttpAppError::from(e), &headers);
    }

    // Not rejected when absent: the dispatch below fails address parsing
    // instead, surfacing as a 500.
    let email = fields
        .email
        .unwrap_or_else(|| "No email provided".to_string());

    let stored = match upload::store_audio(state.storage.as_ref(), part).await {
        Ok(stored) => stored,
        Err(e) => return HttpAppError::from(e).into_response(),
    };

    let form_data = AudioFormData {
        email,
        is_agreed: fields.is_agreed,
        audio: stored.clone(),
    };

    let notification = notifications::audio_confirmation(
        &state.config.email_user,
        &form_data.email,
        form_data.is_agreed,
        &stored,
    );

    if let Err(e) = state.mailer.send(&notification).await {
        tracing::error!(error = %e, to = %form_data.email, "Failed to dispatch audio confirmation");
        return HttpAppError::from(e).into_response();
    }

    (
        StatusCode::CREATED,
        Json(AudioSubmissionResponse {
            message: "Form submitted successfully and email sent".to_string(),
            form_data,
        }),
    )
        .into_response()
}
