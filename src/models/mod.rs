//! Data models
//!
//! Defines the documents exchanged over the API and stored on disk.

pub mod profile;

pub use profile::{Profile, REQUIRED_FIELDS};
