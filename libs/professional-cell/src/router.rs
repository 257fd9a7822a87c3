use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::catalog::ScheduleCatalog;

pub fn professional_routes(catalog: Arc<ScheduleCatalog>) -> Router {
    Router::new()
        .route("/", get(handlers::list_professionals))
        .route("/{professional_id}", get(handlers::get_professional))
        .route("/{professional_id}/schedule", get(handlers::get_schedule))
        .with_state(catalog)
}
