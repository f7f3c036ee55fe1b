//! SOAP note generation API
//!
//! Accepts a multipart upload with the audio in a part named `file` and
//! answers with the canned SOAP note.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::IntoResponse,
};
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::SharedState;

/// Name of the multipart part carrying the audio
pub const UPLOAD_FIELD: &str = "file";

/// POST /generate-soap - Validate an audio upload and return the SOAP note
///
/// Only the part's declared content type is checked. The response body is
/// the static response file as stored on disk.
pub async fn generate_soap_note(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != UPLOAD_FIELD {
            warn!("Unknown multipart field: {}", field_name);
            continue;
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let content_type = field.content_type().map(|s| s.to_string());
        let audio = field.bytes().await?;

        info!(
            file_name = %file_name,
            content_type = ?content_type,
            size = audio.len(),
            "Received audio upload"
        );

        let note = state
            .soap
            .generate_note(&audio, content_type.as_deref())
            .await?;

        return Ok(([(header::CONTENT_TYPE, "application/json")], note));
    }

    Err(AppError::MissingUpload)
}
