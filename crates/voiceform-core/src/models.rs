//! Shared wire models.
//!
//! Field names serialize as camelCase: these shapes are part of the public
//! API contract (response echoes) and of the notification composition.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

/// A persisted upload. Named `<unix-timestamp-ms>-<original-name>` on disk;
/// the file is never deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Client-supplied filename, sanitized.
    pub original_name: String,
    /// Generated on-disk name (timestamp prefix + original name).
    pub stored_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    #[schema(value_type = String)]
    pub path_on_disk: PathBuf,
}

impl StoredFile {
    /// Size in kilobytes, formatted with two decimal places for display.
    pub fn size_in_kb(&self) -> String {
        format!("{:.2}", self.size_bytes as f64 / 1024.0)
    }
}

/// Processed audio submission, echoed back to the client on success.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AudioFormData {
    pub email: String,
    pub is_agreed: bool,
    pub audio: StoredFile,
}

/// Generic form submission. All fields are optional at the wire level;
/// `email` and `formName` are required by the handler (missing values are
/// rejected with a validation error rather than crashing mid-compose).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub cancer_type: Option<String>,
    pub condition: Option<String>,
    pub reason: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub form_name: Option<String>,
}

/// One outbound email. Constructed per request, consumed once by the
/// mailer, then discarded; attachments are read from `path_on_disk` at
/// send time.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachments: Vec<StoredFile>,
}
