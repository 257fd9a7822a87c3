pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Professional, ScheduleError, TimeSlot, WeeklyScheduleEntry};
pub use services::availability::{filter_available, generate_slots, overlaps, weekday_index};
pub use services::catalog::ScheduleCatalog;
