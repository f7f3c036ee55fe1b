//! API module
//!
//! Contains HTTP request handlers for the profile, upload and greeting endpoints

pub mod greeting;
pub mod profile;
pub mod soap;

pub use greeting::{greet, health_check};
pub use profile::{get_profile, update_profile};
pub use soap::generate_soap_note;
