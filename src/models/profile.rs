//! Doctor profile document
//!
//! The profile is free-form JSON: only the presence of the required keys is
//! checked, their values are never interpreted. Keys are kept in the order
//! the client sent them, including any beyond the required set.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys every stored profile must carry, in validation order
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "title",
    "location",
    "experience",
    "education",
    "publications",
    "contact",
];

/// A doctor's biographical and contact document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    /// Wrap an already-parsed JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// First required key absent from this profile, if any
    ///
    /// A key mapped to `null` counts as present.
    pub fn missing_field(&self) -> Option<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .find(|field| !self.0.contains_key(*field))
    }

    /// Check that every required key is present
    ///
    /// # Returns
    /// * `Ok(())` - All seven keys are present
    /// * `Err(AppError::MissingField)` - Names the first missing key
    pub fn validate(&self) -> Result<(), AppError> {
        match self.missing_field() {
            Some(field) => Err(AppError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Look up a single field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize as pretty-printed JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}
