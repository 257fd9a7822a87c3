use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use professional_cell::{
    filter_available, generate_slots, weekday_index, ScheduleCatalog, ScheduleError, TimeSlot,
};

use crate::models::{AppointmentError, AppointmentStatus};
use crate::services::ledger::AppointmentLedger;

/// Combines the catalog's theoretical slots with the ledger's confirmed
/// bookings to answer "what can actually be booked". Pure reads; both
/// collaborators are borrowed for the duration of one query.
pub struct AvailabilityService<'a> {
    catalog: &'a ScheduleCatalog,
    ledger: &'a AppointmentLedger,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(catalog: &'a ScheduleCatalog, ledger: &'a AppointmentLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Free slots for a professional on a date, at the requested duration.
    pub fn available_slots(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> Result<Vec<TimeSlot>, AppointmentError> {
        let professional = self
            .catalog
            .get(professional_id)
            .map_err(|_| AppointmentError::ProfessionalNotFound)?;

        let weekday = weekday_index(date);
        let entry = professional
            .entry_for(weekday)
            .ok_or(ScheduleError::NoScheduleForWeekday(weekday))?;

        let candidates = generate_slots(date, entry.start, entry.end, duration_minutes)?;
        let busy = self.ledger.confirmed_intervals(professional_id, None);
        let available = filter_available(candidates, &busy);

        debug!(
            "Professional {} has {} free slots on {} ({} busy intervals)",
            professional_id,
            available.len(),
            date,
            busy.len()
        );
        Ok(available)
    }

    /// Candidate targets for moving an existing appointment to `new_date`.
    /// Duration comes from the appointment itself, and the appointment's
    /// own interval does not block its candidates.
    pub fn reschedule_options(
        &self,
        appointment_id: Uuid,
        new_date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppointmentError> {
        let appointment = self.ledger.get(appointment_id)?;
        if appointment.status == AppointmentStatus::Cancelled {
            return Err(AppointmentError::CannotRescheduleCancelled);
        }

        let professional = self
            .catalog
            .get(appointment.professional_id)
            .map_err(|_| AppointmentError::ProfessionalNotFound)?;

        let weekday = weekday_index(new_date);
        let entry = professional
            .entry_for(weekday)
            .ok_or(ScheduleError::NoScheduleForWeekday(weekday))?;

        let candidates =
            generate_slots(new_date, entry.start, entry.end, appointment.duration_minutes())?;
        let busy = self
            .ledger
            .confirmed_intervals(appointment.professional_id, Some(appointment_id));

        Ok(filter_available(candidates, &busy))
    }
}
