use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use patient_cell::ProfileStore;
use professional_cell::ScheduleCatalog;
use shared_storage::JsonStore;

use crate::models::Appointment;
use crate::services::ledger::AppointmentLedger;

const APPOINTMENTS_KEY: &str = "appointments";

/// Shared state for the appointment routes: the read-only catalog, the
/// profile store, the mutable ledger, and the durable store behind it.
pub struct AppointmentState {
    pub catalog: Arc<ScheduleCatalog>,
    pub profiles: Arc<ProfileStore>,
    pub ledger: RwLock<AppointmentLedger>,
    store: JsonStore,
}

impl AppointmentState {
    /// Hydrate the ledger from disk. A missing or unreadable file starts
    /// an empty ledger instead of failing startup.
    pub async fn load(
        catalog: Arc<ScheduleCatalog>,
        profiles: Arc<ProfileStore>,
        store: JsonStore,
    ) -> Self {
        let appointments: Vec<Appointment> = match store.read(APPOINTMENTS_KEY).await {
            Ok(Some(appointments)) => appointments,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to load persisted appointments: {err}; starting empty");
                Vec::new()
            }
        };

        info!("Ledger hydrated with {} appointments", appointments.len());
        Self {
            catalog,
            profiles,
            ledger: RwLock::new(AppointmentLedger::new(appointments)),
            store,
        }
    }

    /// Best-effort durable write after a mutation. A failure is logged and
    /// the in-memory ledger stays authoritative for the session.
    pub async fn persist(&self, appointments: &[Appointment]) {
        if let Err(err) = self.store.write(APPOINTMENTS_KEY, appointments).await {
            warn!("Failed to persist appointments: {err}; in-memory state remains authoritative");
        }
    }
}
