//! Audio upload pipeline: extract the multipart form, validate, persist.

use axum::extract::Multipart;
use chrono::Utc;
use voiceform_core::models::StoredFile;
use voiceform_core::AppError;
use voiceform_storage::Storage;

/// The file part of the multipart form, buffered in full.
pub struct AudioPart {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Text fields accompanying the audio part.
#[derive(Debug, Default)]
pub struct AudioFormFields {
    pub email: Option<String>,
    pub is_agreed: bool,
}

/// Drain the multipart form: one optional `audio` file part plus the
/// `email` and `isAgreed` text fields. Unknown fields are ignored.
pub async fn extract_audio_form(
    mut multipart: Multipart,
) -> Result<(Option<AudioPart>, AudioFormFields), AppError> {
    let mut audio: Option<AudioPart> = None;
    let mut fields = AudioFormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "audio" => {
                if audio.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple audio fields are not allowed; send exactly one field named 'audio'"
                            .to_string(),
                    ));
                }
                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::InvalidInput(format!("Failed to read file data: {}", e))
                    })?
                    .to_vec();
                audio = Some(AudioPart {
                    original_name,
                    content_type,
                    data,
                });
            }
            "email" => {
                fields.email = field.text().await.ok().filter(|s| !s.is_empty());
            }
            "isAgreed" => {
                fields.is_agreed = field.text().await.map(|v| v == "true").unwrap_or(false);
            }
            _ => {}
        }
    }

    Ok((audio, fields))
}

/// Persist a validated audio part under `<timestamp-ms>-<sanitized-name>`.
/// Collisions require two uploads of the same filename in the same
/// millisecond; accepted, not mitigated.
pub async fn store_audio(storage: &dyn Storage, part: AudioPart) -> Result<StoredFile, AppError> {
    let safe_name = sanitize_filename(&part.original_name);
    let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), safe_name);
    let size_bytes = part.data.len() as u64;

    let (key, path) = storage.store(&stored_name, part.data).await.map_err(|e| {
        tracing::error!(error = %e, stored_name = %stored_name, "Failed to persist upload");
        AppError::Storage(format!("Failed to persist upload: {}", e))
    })?;

    tracing::info!(
        stored_name = %key,
        original_name = %part.original_name,
        size_bytes = size_bytes,
        "Upload persisted"
    );

    Ok(StoredFile {
        original_name: part.original_name,
        stored_name: key,
        size_bytes,
        mime_type: part.content_type,
        path_on_disk: path,
    })
}

/// Sanitize a client-supplied filename for use in the storage key: strip
/// path components, cap the length, replace hostile characters. Degenerate
/// names collapse to "file".
pub fn sanitize_filename(filename: &str) -> String {
    const MAX_FILENAME_LENGTH: usize = 255;

    let filename_only = std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.contains("..") || sanitized.trim().is_empty() || sanitized.len() < 3 {
        return "file".to_string();
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;
    use voiceform_storage::LocalStorage;

    #[test]
    fn sanitize_filename_strips_path_components() {
        assert_eq!(sanitize_filename("/etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir/clip.mp3"), "clip.mp3");
    }

    #[test]
    fn sanitize_filename_replaces_hostile_characters() {
        assert_eq!(sanitize_filename("my clip (1).mp3"), "my_clip__1_.mp3");
        assert_eq!(sanitize_filename("clip.mp3"), "clip.mp3");
    }

    #[test]
    fn sanitize_filename_collapses_degenerate_names() {
        assert_eq!(sanitize_filename(".."), "file");
        assert_eq!(sanitize_filename("a"), "file");
        assert_eq!(sanitize_filename(""), "file");
    }

    #[tokio::test]
    async fn store_audio_writes_timestamped_file() {
        let dir = tempdir().unwrap();
        let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(dir.path()).await.unwrap());

        let part = AudioPart {
            original_name: "clip.mp3".to_string(),
            content_type: "audio/mpeg".to_string(),
            data: b"audio bytes".to_vec(),
        };

        let stored = store_audio(storage.as_ref(), part).await.unwrap();

        assert_eq!(stored.original_name, "clip.mp3");
        assert!(stored.stored_name.ends_with("-clip.mp3"));
        assert_eq!(stored.size_bytes, 11);
        assert_eq!(stored.mime_type, "audio/mpeg");
        assert!(stored.path_on_disk.exists());
    }
}
