use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

use crate::models::{ScheduleError, TimeSlot};

/// Map a calendar date onto the catalog's weekday convention (0 = Sunday).
pub fn weekday_index(date: NaiveDate) -> u8 {
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// Generate the ordered candidate slots of `duration_minutes` inside the
/// attention window `[window_start, window_end)` on `date`.
///
/// A trailing slot that would overrun the window is dropped, never
/// truncated. An empty window (`window_start == window_end`) yields an
/// empty list; an inverted window is a caller bug and is rejected.
pub fn generate_slots(
    date: NaiveDate,
    window_start: NaiveTime,
    window_end: NaiveTime,
    duration_minutes: i64,
) -> Result<Vec<TimeSlot>, ScheduleError> {
    if duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    if window_start > window_end {
        return Err(ScheduleError::InvalidScheduleWindow);
    }

    let window_start = date.and_time(window_start).and_utc();
    let window_end = date.and_time(window_end).and_utc();
    let step = Duration::minutes(duration_minutes);

    let mut slots = Vec::new();
    let mut current = window_start;
    while current + step <= window_end {
        slots.push(TimeSlot {
            start: current,
            end: current + step,
            duration_minutes,
        });
        current += step;
    }

    Ok(slots)
}

/// Half-open interval overlap: `[start1, end1)` and `[start2, end2)` share
/// an instant iff `start1 < end2 && end1 > start2`. Back-to-back intervals
/// touching at a boundary do not overlap.
pub fn overlaps(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && end1 > start2
}

/// Keep only the slots that do not overlap any busy interval. The caller
/// supplies the busy list already narrowed to one professional's confirmed
/// appointments; cancelled ones must never reach this function.
pub fn filter_available(
    slots: Vec<TimeSlot>,
    busy: &[(DateTime<Utc>, DateTime<Utc>)],
) -> Vec<TimeSlot> {
    slots
        .into_iter()
        .filter(|slot| {
            !busy
                .iter()
                .any(|&(busy_start, busy_end)| overlaps(slot.start, slot.end, busy_start, busy_end))
        })
        .collect()
}
