use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Professional, ScheduleError};

/// Read-only directory of professionals and their recurring weekly
/// templates, loaded once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct ScheduleCatalog {
    professionals: Vec<Professional>,
}

impl ScheduleCatalog {
    /// Load and validate the catalog from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, ScheduleError> {
        debug!("Loading professional catalog from {}", path.display());

        let raw = tokio::fs::read(path).await.map_err(|err| {
            ScheduleError::Catalog(format!("failed to read {}: {}", path.display(), err))
        })?;
        let professionals: Vec<Professional> = serde_json::from_slice(&raw).map_err(|err| {
            ScheduleError::Catalog(format!("failed to parse {}: {}", path.display(), err))
        })?;

        Self::from_professionals(professionals)
    }

    /// Build a catalog from already-parsed records, rejecting malformed
    /// weekly templates. Two entries for the same weekday are a
    /// data-integrity error, not a first-match-wins situation.
    pub fn from_professionals(professionals: Vec<Professional>) -> Result<Self, ScheduleError> {
        for professional in &professionals {
            validate_schedule(professional)?;
        }

        info!("Catalog loaded with {} professionals", professionals.len());
        Ok(Self { professionals })
    }

    pub fn list(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn get(&self, id: Uuid) -> Result<&Professional, ScheduleError> {
        self.professionals
            .iter()
            .find(|professional| professional.id == id)
            .ok_or(ScheduleError::NotFound)
    }
}

fn validate_schedule(professional: &Professional) -> Result<(), ScheduleError> {
    let mut seen = [false; 7];

    for entry in &professional.schedule {
        if entry.weekday > 6 {
            return Err(ScheduleError::InvalidWeekday(entry.weekday));
        }
        if entry.start >= entry.end {
            return Err(ScheduleError::InvalidScheduleWindow);
        }

        let day = entry.weekday as usize;
        if seen[day] {
            return Err(ScheduleError::DuplicateWeekday {
                weekday: entry.weekday,
            });
        }
        seen[day] = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklyScheduleEntry;
    use assert_matches::assert_matches;
    use chrono::NaiveTime;

    fn entry(weekday: u8, start: (u32, u32), end: (u32, u32)) -> WeeklyScheduleEntry {
        WeeklyScheduleEntry {
            weekday,
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    fn professional(schedule: Vec<WeeklyScheduleEntry>) -> Professional {
        Professional {
            id: Uuid::new_v4(),
            name: "Lic. Ana García".to_string(),
            specialty: "Psicología Clínica".to_string(),
            schedule,
        }
    }

    #[test]
    fn valid_catalog_loads() {
        let catalog = ScheduleCatalog::from_professionals(vec![professional(vec![
            entry(1, (9, 0), (13, 0)),
            entry(3, (14, 0), (18, 0)),
        ])])
        .unwrap();

        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn duplicate_weekday_is_rejected() {
        let result = ScheduleCatalog::from_professionals(vec![professional(vec![
            entry(1, (9, 0), (12, 0)),
            entry(1, (14, 0), (18, 0)),
        ])]);

        assert_matches!(result, Err(ScheduleError::DuplicateWeekday { weekday: 1 }));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let result =
            ScheduleCatalog::from_professionals(vec![professional(vec![entry(2, (18, 0), (9, 0))])]);

        assert_matches!(result, Err(ScheduleError::InvalidScheduleWindow));
    }

    #[test]
    fn out_of_range_weekday_is_rejected() {
        let result =
            ScheduleCatalog::from_professionals(vec![professional(vec![entry(7, (9, 0), (12, 0))])]);

        assert_matches!(result, Err(ScheduleError::InvalidWeekday(7)));
    }

    #[test]
    fn unknown_professional_is_not_found() {
        let catalog =
            ScheduleCatalog::from_professionals(vec![professional(vec![entry(1, (9, 0), (12, 0))])])
                .unwrap();

        assert_matches!(catalog.get(Uuid::new_v4()), Err(ScheduleError::NotFound));
    }

    #[test]
    fn entry_lookup_by_weekday() {
        let record = professional(vec![entry(1, (9, 0), (12, 0))]);

        assert!(record.entry_for(1).is_some());
        assert!(record.entry_for(2).is_none());
    }
}
