use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::profile::ProfileStore;

pub fn profile_routes(store: Arc<ProfileStore>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::get_profile)
                .put(handlers::save_profile)
                .delete(handlers::clear_profile),
        )
        .with_state(store)
}
