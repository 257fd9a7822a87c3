pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::{Appointment, AppointmentError, AppointmentStatus};
pub use services::availability::AvailabilityService;
pub use services::ledger::AppointmentLedger;
pub use state::AppointmentState;
