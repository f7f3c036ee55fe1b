//! Profile store
//!
//! Reads and replaces the doctor profile JSON document on disk.
//! Writes overwrite the file in place; concurrent writers race and the last
//! one wins.

use crate::error::AppError;
use crate::models::Profile;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// File-backed store for the single doctor profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored profile
    ///
    /// # Returns
    /// * `Ok(Profile)` - The stored document
    /// * `Err(AppError::ProfileNotFound)` - No file at the configured path
    /// * `Err(AppError::InvalidProfileFormat)` - File is not a JSON object
    /// * `Err(AppError::ProfileRead)` - Any other read failure
    pub async fn get_profile(&self) -> Result<Profile, AppError> {
        let contents = fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::ProfileNotFound,
            _ => AppError::ProfileRead(format!("{} - {}", self.path.display(), e)),
        })?;

        let profile: Profile = serde_json::from_slice(&contents)
            .map_err(|e| AppError::InvalidProfileFormat(e.to_string()))?;

        debug!(path = %self.path.display(), "Loaded profile");
        Ok(profile)
    }

    /// Replace the stored profile with `candidate`
    ///
    /// The candidate is validated before anything touches the disk, so a
    /// rejected update leaves the previous file intact. The parent directory
    /// is created when missing.
    ///
    /// # Returns
    /// * `Ok(Profile)` - The candidate, unchanged
    /// * `Err(AppError::MissingField)` - Names the first absent required key
    /// * `Err(AppError::ProfileWrite)` - Directory creation or write failed
    pub async fn update_profile(&self, candidate: Profile) -> Result<Profile, AppError> {
        candidate.validate()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::ProfileWrite(format!(
                    "Failed to create directory {} - {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = candidate
            .to_pretty_json()
            .map_err(|e| AppError::ProfileWrite(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::ProfileWrite(format!("{} - {}", self.path.display(), e)))?;

        info!(path = %self.path.display(), "Profile updated");
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_profile() -> Profile {
        serde_json::from_value(json!({
            "name": "Dr. Jane Doe",
            "title": "Cardiologist",
            "location": "Boston, MA",
            "experience": "15 years",
            "education": ["MD, Harvard Medical School"],
            "publications": [],
            "contact": {"email": "jane@example.com"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_profile_missing_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = ProfileStore::new(temp_dir.path().join("doctor_profile.json"));

        match store.get_profile().await {
            Err(AppError::ProfileNotFound) => {
                // Expected error
            }
            other => panic!("Expected ProfileNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_profile_invalid_json() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("doctor_profile.json");
        std::fs::write(&path, "{ not json").expect("Failed to write file");

        let store = ProfileStore::new(&path);
        match store.get_profile().await {
            Err(AppError::InvalidProfileFormat(_)) => {
                // Expected error
            }
            other => panic!("Expected InvalidProfileFormat error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_profile_json_array_is_format_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("doctor_profile.json");
        std::fs::write(&path, "[1, 2]").expect("Failed to write file");

        let store = ProfileStore::new(&path);
        match store.get_profile().await {
            Err(AppError::InvalidProfileFormat(_)) => {
                // Expected error
            }
            other => panic!("Expected InvalidProfileFormat error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_profile_directory_is_read_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = ProfileStore::new(temp_dir.path());

        match store.get_profile().await {
            Err(AppError::ProfileRead(_)) => {
                // Expected error
            }
            other => panic!("Expected ProfileRead error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_then_get_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = ProfileStore::new(temp_dir.path().join("doctor_profile.json"));

        let written = store
            .update_profile(sample_profile())
            .await
            .expect("Failed to update profile");
        assert_eq!(written, sample_profile());

        let loaded = store.get_profile().await.expect("Failed to read profile");
        assert_eq!(loaded, sample_profile());
    }

    #[tokio::test]
    async fn test_update_writes_pretty_json() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("doctor_profile.json");
        let store = ProfileStore::new(&path);

        store.update_profile(sample_profile()).await.unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("{\n  \"name\": \"Dr. Jane Doe\",\n  \"title\""));
    }

    #[tokio::test]
    async fn test_update_creates_missing_directory() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("data").join("profile.json");
        let store = ProfileStore::new(&path);

        store.update_profile(sample_profile()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_update_rejects_missing_field_and_keeps_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("doctor_profile.json");
        let store = ProfileStore::new(&path);
        store.update_profile(sample_profile()).await.unwrap();
        let before = std::fs::read(&path).unwrap();

        let mut fields = sample_profile().fields().clone();
        fields.remove("publications");
        match store.update_profile(Profile::new(fields)).await {
            Err(AppError::MissingField(field)) => assert_eq!(field, "publications"),
            other => panic!("Expected MissingField error, got: {:?}", other),
        }

        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_replaces_rather_than_merges() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = ProfileStore::new(temp_dir.path().join("doctor_profile.json"));

        let mut first = sample_profile().fields().clone();
        first.insert("specialty".to_string(), json!("Cardiology"));
        store.update_profile(Profile::new(first)).await.unwrap();
        store.update_profile(sample_profile()).await.unwrap();

        let loaded = store.get_profile().await.unwrap();
        assert!(loaded.get("specialty").is_none());
    }
}
