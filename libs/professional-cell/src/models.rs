use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A professional as loaded from the static catalog. Immutable for the
/// lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub schedule: Vec<WeeklyScheduleEntry>,
}

impl Professional {
    /// The recurring window for a weekday (0 = Sunday), if the professional
    /// works that day. The catalog guarantees at most one entry per weekday.
    pub fn entry_for(&self, weekday: u8) -> Option<&WeeklyScheduleEntry> {
        self.schedule.iter().find(|entry| entry.weekday == weekday)
    }
}

/// One recurring attention window: weekday 0-6 (0 = Sunday, matching
/// `Date.getDay()` in the booking frontend), with `start < end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    pub weekday: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A candidate bookable interval `[start, end)` on a concrete date.
/// Pure value, carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleError {
    #[error("Slot duration must be a positive number of minutes, got {0}")]
    InvalidDuration(i64),

    #[error("Schedule window start must be before its end")]
    InvalidScheduleWindow,

    #[error("Weekday must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidWeekday(u8),

    #[error("Professional has more than one schedule entry for weekday {weekday}")]
    DuplicateWeekday { weekday: u8 },

    #[error("Professional has no schedule for weekday {0}")]
    NoScheduleForWeekday(u8),

    #[error("Professional not found")]
    NotFound,

    #[error("Catalog error: {0}")]
    Catalog(String),
}
