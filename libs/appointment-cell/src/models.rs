use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use patient_cell::PatientProfile;
use professional_cell::ScheduleError;

/// A booked appointment. Professional name and specialty are snapshots
/// taken at booking time so history stays stable even if the catalog
/// changes later; the patient profile is embedded for the same reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub specialty: String,
    pub patient: PatientProfile,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub professional_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub new_start: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub duration_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct RescheduleOptionsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub professional_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Slot is no longer available")]
    SlotNoLongerAvailable,

    #[error("Reschedule must keep the original duration: expected {expected_minutes} minutes, got {requested_minutes}")]
    DurationMismatch {
        expected_minutes: i64,
        requested_minutes: i64,
    },

    #[error("A cancelled appointment cannot be rescheduled; book a new one")]
    CannotRescheduleCancelled,

    #[error("Save a complete patient profile before booking")]
    IncompleteProfile,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
