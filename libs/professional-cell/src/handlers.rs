use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::services::catalog::ScheduleCatalog;

#[axum::debug_handler]
pub async fn list_professionals(
    State(catalog): State<Arc<ScheduleCatalog>>,
) -> Result<Json<Value>, AppError> {
    let professionals = catalog.list();

    Ok(Json(json!({
        "professionals": professionals,
        "total": professionals.len()
    })))
}

#[axum::debug_handler]
pub async fn get_professional(
    State(catalog): State<Arc<ScheduleCatalog>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let professional = catalog
        .get(professional_id)
        .map_err(|_| AppError::NotFound("Professional not found".to_string()))?;

    Ok(Json(json!(professional)))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(catalog): State<Arc<ScheduleCatalog>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let professional = catalog
        .get(professional_id)
        .map_err(|_| AppError::NotFound("Professional not found".to_string()))?;

    Ok(Json(json!({
        "professional_id": professional.id,
        "schedule": professional.schedule
    })))
}
