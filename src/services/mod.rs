//! Service layer for business logic
//!
//! This module contains service abstractions that separate business logic
//! from HTTP handlers, making the code more modular and testable.

pub mod profile;
pub mod soap;

pub use profile::ProfileStore;
pub use soap::SoapNoteService;
