//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default directory holding the profile and static response files
pub const DEFAULT_DATA_DIR: &str = "./data";

/// File name of the doctor profile inside the data directory
pub const PROFILE_FILE_NAME: &str = "doctor_profile.json";

/// File name of the canned SOAP note inside the data directory
pub const SOAP_RESPONSE_FILE_NAME: &str = "response.json";

/// Default cap on request bodies, sized for a few minutes of WAV audio
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Largest request body accepted, in bytes
    pub max_upload_bytes: usize,
}

/// Locations of the JSON documents the service reads and writes
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Doctor profile document
    pub profile_path: PathBuf,
    /// Static payload returned for accepted uploads
    pub soap_response_path: PathBuf,
}

impl StorageConfig {
    /// Both files under one data directory, using the default file names
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            profile_path: data_dir.join(PROFILE_FILE_NAME),
            soap_response_path: data_dir.join(SOAP_RESPONSE_FILE_NAME),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let mut storage = StorageConfig::in_dir(data_dir);
        if let Some(path) = env::var_os("PROFILE_DATA_PATH") {
            storage.profile_path = PathBuf::from(path);
        }
        if let Some(path) = env::var_os("SOAP_RESPONSE_PATH") {
            storage.soap_response_path = PathBuf::from(path);
        }

        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|b| b.parse().ok())
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
            storage,
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
