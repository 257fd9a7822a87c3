use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use patient_cell::PatientProfile;
use professional_cell::{overlaps, Professional, ScheduleError};

use crate::models::{Appointment, AppointmentError, AppointmentStatus};

/// Owns the appointment records and every mutation on them.
///
/// Invariant: the confirmed appointments of any one professional are
/// pairwise non-overlapping. Each mutation re-validates against the
/// current records at commit time, so a stale availability view shown to
/// the user can never smuggle a conflicting booking in.
pub struct AppointmentLedger {
    appointments: Vec<Appointment>,
}

impl AppointmentLedger {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Book `[start, end)` with the given professional, snapshotting their
    /// display data and the patient profile into the new record.
    pub fn create(
        &mut self,
        professional: &Professional,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        patient: PatientProfile,
    ) -> Result<Appointment, AppointmentError> {
        if start >= end {
            return Err(AppointmentError::Schedule(
                ScheduleError::InvalidScheduleWindow,
            ));
        }

        if self.has_conflict(professional.id, start, end, None) {
            warn!(
                "Booking rejected for professional {}: slot {} - {} is taken",
                professional.id, start, end
            );
            return Err(AppointmentError::SlotNoLongerAvailable);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            professional_id: professional.id,
            professional_name: professional.name.clone(),
            specialty: professional.specialty.clone(),
            patient,
            start,
            end,
            status: AppointmentStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };

        debug!(
            "Appointment {} created with {} at {}",
            appointment.id, appointment.professional_name, appointment.start
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Mark an appointment cancelled, keeping the record for history.
    /// Cancelling an already-cancelled appointment is a no-op.
    pub fn cancel(&mut self, id: Uuid) -> Result<Appointment, AppointmentError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)?;

        if appointment.status == AppointmentStatus::Cancelled {
            debug!("Appointment {} was already cancelled", id);
            return Ok(appointment.clone());
        }

        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = Utc::now();
        debug!("Appointment {} cancelled", id);
        Ok(appointment.clone())
    }

    /// Move an appointment to `[new_start, new_end)`. Rescheduling
    /// preserves duration and never resizes; the overlap re-check excludes
    /// the appointment itself.
    pub fn reschedule(
        &mut self,
        id: Uuid,
        new_start: DateTime<Utc>,
        new_end: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        let current = self
            .appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)?;

        if current.status == AppointmentStatus::Cancelled {
            return Err(AppointmentError::CannotRescheduleCancelled);
        }

        let expected = current.end - current.start;
        let requested = new_end - new_start;
        if requested != expected {
            return Err(AppointmentError::DurationMismatch {
                expected_minutes: expected.num_minutes(),
                requested_minutes: requested.num_minutes(),
            });
        }

        let professional_id = current.professional_id;
        if self.has_conflict(professional_id, new_start, new_end, Some(id)) {
            warn!(
                "Reschedule rejected for appointment {}: slot {} - {} is taken",
                id, new_start, new_end
            );
            return Err(AppointmentError::SlotNoLongerAvailable);
        }

        let appointment = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)?;
        appointment.start = new_start;
        appointment.end = new_end;
        appointment.status = AppointmentStatus::Confirmed;
        appointment.updated_at = Utc::now();

        debug!("Appointment {} rescheduled to {}", id, new_start);
        Ok(appointment.clone())
    }

    pub fn get(&self, id: Uuid) -> Result<&Appointment, AppointmentError> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)
    }

    /// List appointments ordered by start ascending; ties break by
    /// professional id then appointment id so combined views stay stable.
    pub fn list(
        &self,
        professional_id: Option<Uuid>,
        status: Option<AppointmentStatus>,
    ) -> Vec<Appointment> {
        let mut items: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|appointment| {
                professional_id.map_or(true, |id| appointment.professional_id == id)
                    && status.map_or(true, |wanted| appointment.status == wanted)
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(a.professional_id.cmp(&b.professional_id))
                .then(a.id.cmp(&b.id))
        });
        items
    }

    /// The busy intervals that constrain new bookings: confirmed
    /// appointments of one professional, optionally excluding one record
    /// (the appointment being rescheduled).
    pub fn confirmed_intervals(
        &self,
        professional_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        self.appointments
            .iter()
            .filter(|appointment| {
                appointment.professional_id == professional_id
                    && appointment.status == AppointmentStatus::Confirmed
                    && exclude != Some(appointment.id)
            })
            .map(|appointment| (appointment.start, appointment.end))
            .collect()
    }

    /// Full copy of the records, for persistence after a mutation.
    pub fn snapshot(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    fn has_conflict(
        &self,
        professional_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<Uuid>,
    ) -> bool {
        self.confirmed_intervals(professional_id, exclude)
            .iter()
            .any(|&(busy_start, busy_end)| overlaps(start, end, busy_start, busy_end))
    }
}
