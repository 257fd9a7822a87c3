use tokio::sync::RwLock;
use tracing::{debug, warn};

use shared_storage::JsonStore;

use crate::models::{PatientProfile, ProfileError};

const PROFILE_KEY: &str = "profile";

/// Owns the remembered patient profile for this deployment. In-memory
/// state is authoritative for the session; the JSON store is best-effort
/// durability behind it.
pub struct ProfileStore {
    store: JsonStore,
    current: RwLock<Option<PatientProfile>>,
}

impl ProfileStore {
    /// Hydrate from disk. An unreadable profile file degrades to "no
    /// profile saved" rather than failing startup.
    pub async fn load(store: JsonStore) -> Self {
        let current = match store.read(PROFILE_KEY).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("Failed to load persisted patient profile: {err}");
                None
            }
        };

        if current.is_some() {
            debug!("Patient profile restored from disk");
        }

        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub async fn get(&self) -> Option<PatientProfile> {
        self.current.read().await.clone()
    }

    /// The saved profile, or `NotSaved` when booking is attempted before
    /// one exists. Saved profiles are always complete.
    pub async fn require(&self) -> Result<PatientProfile, ProfileError> {
        self.get().await.ok_or(ProfileError::NotSaved)
    }

    pub async fn save(&self, profile: PatientProfile) -> Result<PatientProfile, ProfileError> {
        profile.validate()?;

        *self.current.write().await = Some(profile.clone());
        if let Err(err) = self.store.write(PROFILE_KEY, &profile).await {
            warn!("Failed to persist patient profile: {err}; keeping in-memory copy");
        }

        Ok(profile)
    }

    pub async fn clear(&self) {
        *self.current.write().await = None;
        if let Err(err) = self.store.remove(PROFILE_KEY).await {
            warn!("Failed to remove persisted patient profile: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn profile() -> PatientProfile {
        PatientProfile {
            name: "María López".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+54 11 5555-0001".to_string(),
        }
    }

    async fn store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::load(JsonStore::new(dir.path())).await;
        (dir, store)
    }

    #[tokio::test]
    async fn save_then_get_returns_profile() {
        let (_dir, store) = store().await;

        store.save(profile()).await.unwrap();

        assert_eq!(store.get().await, Some(profile()));
        assert_eq!(store.require().await.unwrap(), profile());
    }

    #[tokio::test]
    async fn blank_field_is_rejected() {
        let (_dir, store) = store().await;
        let incomplete = PatientProfile {
            phone: "   ".to_string(),
            ..profile()
        };

        assert_matches!(
            store.save(incomplete).await,
            Err(ProfileError::Incomplete { field: "phone" })
        );
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn require_without_profile_fails() {
        let (_dir, store) = store().await;

        assert_matches!(store.require().await, Err(ProfileError::NotSaved));
    }

    #[tokio::test]
    async fn clear_forgets_the_profile() {
        let (_dir, store) = store().await;
        store.save(profile()).await.unwrap();

        store.clear().await;

        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn profile_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = ProfileStore::load(JsonStore::new(dir.path())).await;
            store.save(profile()).await.unwrap();
        }

        let reloaded = ProfileStore::load(JsonStore::new(dir.path())).await;
        assert_eq!(reloaded.get().await, Some(profile()));
    }
}
