//! SOAP note upload gate
//!
//! Accepts WAV uploads by their declared media type and answers with a canned
//! SOAP note read from disk. The audio itself is never decoded or inspected;
//! this is where transcription and summarization would plug in.

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Media types accepted for note generation
pub const ALLOWED_AUDIO_TYPES: [&str; 6] = [
    "audio/wav",
    "audio/x-wav",
    "audio/x-pn-wav",
    "audio/wave",
    "audio/vnd.wave",
    "audio/x-ms-wav",
];

/// Whether `media_type` is one of the WAV-family types
///
/// The comparison is exact: no case folding and no parameter stripping.
pub fn is_allowed_audio_type(media_type: &str) -> bool {
    ALLOWED_AUDIO_TYPES.contains(&media_type)
}

/// Serves the static SOAP note for accepted uploads
#[derive(Debug, Clone)]
pub struct SoapNoteService {
    response_path: PathBuf,
}

impl SoapNoteService {
    /// Create a service answering with the JSON file at `response_path`
    pub fn new(response_path: impl Into<PathBuf>) -> Self {
        Self {
            response_path: response_path.into(),
        }
    }

    /// Validate an upload and return the canned note
    ///
    /// # Arguments
    /// * `_audio` - Uploaded file bytes (unused)
    /// * `declared_media_type` - Content type declared for the upload part
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The static response file's bytes, verbatim
    /// * `Err(AppError::UnsupportedMediaType)` - Declared type is not WAV
    /// * `Err(AppError::SoapResponseNotFound)` - Static file is missing
    /// * `Err(AppError::InvalidSoapResponse)` - Static file is not JSON
    pub async fn generate_note(
        &self,
        _audio: &[u8],
        declared_media_type: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        match declared_media_type {
            Some(media_type) if is_allowed_audio_type(media_type) => {}
            Some(media_type) => {
                return Err(AppError::UnsupportedMediaType(media_type.to_string()))
            }
            None => return Err(AppError::UnsupportedMediaType("none".to_string())),
        }

        self.load_static_response().await
    }

    /// Read the static response, checking that it is well-formed JSON
    pub async fn load_static_response(&self) -> Result<Vec<u8>, AppError> {
        let contents = fs::read(&self.response_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    AppError::SoapResponseNotFound(self.response_path.display().to_string())
                }
                _ => AppError::SoapResponseRead(format!(
                    "{} - {}",
                    self.response_path.display(),
                    e
                )),
            })?;

        serde_json::from_slice::<serde::de::IgnoredAny>(&contents)
            .map_err(|e| AppError::InvalidSoapResponse(e.to_string()))?;

        debug!(
            path = %self.response_path.display(),
            bytes = contents.len(),
            "Returning static SOAP response"
        );
        Ok(contents)
    }
}
