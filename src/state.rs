//! Application state
//!
//! Everything handlers need, built once from `Config` and shared read-only
//! across requests. The filesystem is the only mutable resource.

use crate::config::{Config, StorageConfig, DEFAULT_MAX_UPLOAD_BYTES};
use crate::services::{ProfileStore, SoapNoteService};
use std::sync::Arc;

/// State handed to every handler through axum's `State` extractor
pub type SharedState = Arc<AppState>;

/// Services wired to the configured file locations
#[derive(Debug, Clone)]
pub struct AppState {
    /// Doctor profile persistence
    pub profiles: ProfileStore,
    /// Upload gate serving the canned SOAP note
    pub soap: SoapNoteService,
    /// Largest request body the router accepts
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Build state for the given file locations with the default body limit
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            profiles: ProfileStore::new(&storage.profile_path),
            soap: SoapNoteService::new(&storage.soap_response_path),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Build shared state from the full configuration
    pub fn shared(config: &Config) -> SharedState {
        Arc::new(Self {
            max_upload_bytes: config.server.max_upload_bytes,
            ..Self::new(&config.storage)
        })
    }
}
