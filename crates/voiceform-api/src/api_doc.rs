//! OpenAPI documentation.
//!
//! Served at `/api/openapi.json`; the RapiDoc UI is mounted at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use voiceform_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voiceform API",
        version = "0.1.0",
        description = "Form submission relay: accepts an audio submission (multipart upload) and a generic text form, and relays each as an email notification. Form endpoints are mounted under /api."
    ),
    paths(
        handlers::audio_submit::submit_audio,
        handlers::form_submit::submit_form,
        handlers::form_data::get_form_data,
    ),
    components(schemas(
        models::StoredFile,
        models::AudioFormData,
        models::FormSubmission,
        handlers::audio_submit::AudioSubmissionResponse,
        handlers::form_submit::FormSubmissionResponse,
        error::ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Returns the generated OpenAPI spec.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
