//! Doctor profile API handlers
//!
//! Thin wrappers around `ProfileStore`; all validation lives in the store
//! and the `Profile` model.

use crate::error::AppError;
use crate::models::Profile;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

/// GET /api/profile - Read the stored profile
pub async fn get_profile(State(state): State<SharedState>) -> Result<Json<Profile>, AppError> {
    let profile = state.profiles.get_profile().await?;
    Ok(Json(profile))
}

/// PUT /api/profile - Replace the stored profile
///
/// Responds with the submitted profile unchanged.
pub async fn update_profile(
    State(state): State<SharedState>,
    payload: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<Profile>, AppError> {
    let Json(candidate) = payload?;
    let profile = state.profiles.update_profile(candidate).await?;
    Ok(Json(profile))
}
