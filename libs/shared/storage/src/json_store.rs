use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-to-JSON-file store. Each key maps to `<data_dir>/<key>.json`.
///
/// Callers treat every operation as potentially failing I/O; a failed save
/// never invalidates the in-memory state that was already committed.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read and deserialize a value. A missing file is `Ok(None)`, not an error.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No persisted data at {}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let value = serde_json::from_slice(&raw)?;
        Ok(Some(value))
    }

    /// Serialize and persist a value. Writes to a temporary file and renames
    /// so a crash mid-write never leaves a truncated document behind.
    pub async fn write<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let path = self.path_for(key);
        let tmp_path = self.data_dir.join(format!("{key}.json.tmp"));

        let raw = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&tmp_path, &raw).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!("Persisted {} bytes to {}", raw.len(), path.display());
        Ok(())
    }

    /// Delete a persisted value. Deleting a missing key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}
