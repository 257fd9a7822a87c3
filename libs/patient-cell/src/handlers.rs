use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use shared_models::error::AppError;

use crate::models::PatientProfile;
use crate::services::profile::ProfileStore;

#[axum::debug_handler]
pub async fn get_profile(
    State(store): State<Arc<ProfileStore>>,
) -> Result<Json<PatientProfile>, AppError> {
    let profile = store
        .get()
        .await
        .ok_or_else(|| AppError::NotFound("No patient profile saved".to_string()))?;

    Ok(Json(profile))
}

#[axum::debug_handler]
pub async fn save_profile(
    State(store): State<Arc<ProfileStore>>,
    Json(profile): Json<PatientProfile>,
) -> Result<Json<PatientProfile>, AppError> {
    let saved = store
        .save(profile)
        .await
        .map_err(|err| AppError::ValidationError(err.to_string()))?;

    Ok(Json(saved))
}

#[axum::debug_handler]
pub async fn clear_profile(State(store): State<Arc<ProfileStore>>) -> StatusCode {
    store.clear().await;
    StatusCode::NO_CONTENT
}
