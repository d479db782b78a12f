//! Request body extractors.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use voiceform_core::AppError;

use crate::error::HttpAppError;

/// Body extractor accepting either JSON or urlencoded form bodies,
/// selected by Content-Type. Deserialization failures become our standard
/// 400 error shape instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            let Json(inner) = Json::<T>::from_request(req, state).await.map_err(|rej| {
                HttpAppError(AppError::InvalidInput(format!(
                    "Invalid request body: {}",
                    rej.body_text()
                )))
            })?;
            Ok(FormOrJson(inner))
        } else {
            let Form(inner) = Form::<T>::from_request(req, state).await.map_err(|rej| {
                HttpAppError(AppError::InvalidInput(format!(
                    "Invalid request body: {}",
                    rej.body_text()
                )))
            })?;
            Ok(FormOrJson(inner))
        }
    }
}
