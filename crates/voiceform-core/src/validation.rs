//! Upload and form validation.

use thiserror::Error;

/// Accepted MIME type family for uploads.
pub const AUDIO_MIME_PREFIX: &str = "audio/";

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Only audio files are allowed!")]
    NotAudio { content_type: String },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("No audio file uploaded")]
    MissingFile,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Audio upload validator
///
/// Accepts a file iff its declared content type is in the `audio/` family
/// and its size does not exceed the configured ceiling. Runs before any
/// disk write; a rejected upload persists nothing.
pub struct AudioValidator {
    max_file_size: usize,
}

impl AudioValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Normalize a MIME type by stripping parameters
    /// (e.g. "audio/ogg; codecs=opus" -> "audio/ogg").
    fn normalize_mime_type(content_type: &str) -> &str {
        content_type
            .split(';')
            .next()
            .map(|s| s.trim())
            .unwrap_or(content_type)
    }

    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = Self::normalize_mime_type(content_type).to_lowercase();
        if !normalized.starts_with(AUDIO_MIME_PREFIX) {
            return Err(ValidationError::NotAudio {
                content_type: content_type.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Validate all aspects of an upload.
    pub fn validate(&self, content_type: &str, size: usize) -> Result<(), ValidationError> {
        self.validate_content_type(content_type)?;
        self.validate_file_size(size)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> AudioValidator {
        AudioValidator::new(10 * 1024 * 1024)
    }

    #[test]
    fn accepts_audio_content_types() {
        let validator = test_validator();
        assert!(validator.validate_content_type("audio/mpeg").is_ok());
        assert!(validator.validate_content_type("audio/wav").is_ok());
        assert!(validator.validate_content_type("AUDIO/OGG").is_ok()); // case insensitive
    }

    #[test]
    fn accepts_audio_with_mime_parameters() {
        let validator = test_validator();
        assert!(validator
            .validate_content_type("audio/ogg; codecs=opus")
            .is_ok());
    }

    #[test]
    fn rejects_non_audio_content_types() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_content_type("image/png"),
            Err(ValidationError::NotAudio { .. })
        ));
        assert!(validator
            .validate_content_type("application/octet-stream")
            .is_err());
        // "audio" must be the type, not a substring elsewhere
        assert!(validator.validate_content_type("video/audio-ish").is_err());
    }

    #[test]
    fn accepts_files_up_to_the_ceiling() {
        let validator = test_validator();
        assert!(validator.validate_file_size(10 * 1024 * 1024).is_ok());
        assert!(validator.validate_file_size(0).is_ok());
    }

    #[test]
    fn rejects_oversized_files() {
        let validator = test_validator();
        let result = validator.validate_file_size(10 * 1024 * 1024 + 1);
        match result {
            Err(ValidationError::FileTooLarge { size, max }) => {
                assert_eq!(size, 10 * 1024 * 1024 + 1);
                assert_eq!(max, 10 * 1024 * 1024);
            }
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn validate_checks_type_before_size() {
        let validator = AudioValidator::new(16);
        // Both checks would fail; the content type error wins.
        assert!(matches!(
            validator.validate("text/plain", 1024),
            Err(ValidationError::NotAudio { .. })
        ));
        assert!(matches!(
            validator.validate("audio/mpeg", 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn missing_file_message_matches_api_contract() {
        assert_eq!(
            ValidationError::MissingFile.to_string(),
            "No audio file uploaded"
        );
    }
}
