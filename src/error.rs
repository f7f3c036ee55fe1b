//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No profile file exists at the configured path
    #[error("Profile data not found")]
    ProfileNotFound,

    /// Profile file exists but is not a JSON object
    #[error("Invalid profile data format: {0}")]
    InvalidProfileFormat(String),

    /// Profile file could not be read
    #[error("Failed to read profile: {0}")]
    ProfileRead(String),

    /// Profile file could not be written
    #[error("Failed to update profile: {0}")]
    ProfileWrite(String),

    /// Candidate profile lacks one of the required keys
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Uploaded file declared a media type outside the WAV allow-list
    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),

    /// Multipart request carried no `file` part
    #[error("No file uploaded")]
    MissingUpload,

    /// Request is not a usable multipart body (wrong content type, no boundary)
    #[error("Invalid upload request: {0}")]
    InvalidUpload(#[from] MultipartRejection),

    /// Multipart body could not be parsed
    #[error("Failed to read multipart field: {0}")]
    Multipart(#[from] MultipartError),

    /// Static SOAP response file is missing
    #[error("Static response file not found: {0}")]
    SoapResponseNotFound(String),

    /// Static SOAP response file is not valid JSON
    #[error("Invalid static response format: {0}")]
    InvalidSoapResponse(String),

    /// Static SOAP response file could not be read
    #[error("Failed to read static response: {0}")]
    SoapResponseRead(String),

    /// Request body was rejected by the JSON extractor
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProfileNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidProfileFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProfileRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProfileWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::BAD_REQUEST,
            AppError::MissingUpload => StatusCode::BAD_REQUEST,
            AppError::InvalidUpload(rejection) => rejection.status(),
            AppError::Multipart(e) => e.status(),
            AppError::SoapResponseNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidSoapResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SoapResponseRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), "{}", error_message);
        } else {
            tracing::warn!(status = %status.as_u16(), "{}", error_message);
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::ProfileNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MissingField("title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedMediaType("text/plain".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SoapResponseNotFound("./data/response.json".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InvalidProfileFormat("eof".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            AppError::MissingField("contact").to_string(),
            "Missing required field: contact"
        );
        assert_eq!(
            AppError::UnsupportedMediaType("text/plain".to_string()).to_string(),
            "Unsupported file type: text/plain"
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::MissingField("name").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Missing required field: name");
        assert_eq!(value["status"], 400);
    }
}
