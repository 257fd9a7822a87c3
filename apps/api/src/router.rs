use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::AppointmentState;
use patient_cell::router::profile_routes;
use patient_cell::ProfileStore;
use professional_cell::router::professional_routes;
use professional_cell::ScheduleCatalog;

pub fn create_router(
    catalog: Arc<ScheduleCatalog>,
    profiles: Arc<ProfileStore>,
    appointments: Arc<AppointmentState>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Turnero API is running!" }))
        .nest("/professionals", professional_routes(catalog))
        .nest("/profile", profile_routes(profiles))
        .nest("/appointments", appointment_routes(appointments))
}
