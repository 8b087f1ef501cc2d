use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::{
    fs,
    sync::{Mutex, MutexGuard},
};

use crate::errors::AppError;

/// One durable JSON document on disk, shared by every handle cloned from it.
///
/// Reads are lock-free snapshots: the atomic rename in [`save`](Self::save)
/// guarantees a reader never observes a partially written file. Mutators
/// must hold the guard from [`write_guard`](Self::write_guard) across their
/// whole read-modify-write cycle so concurrent updates cannot interleave
/// and lose writes.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore {
            inner: Arc::new(StoreInner {
                path: path.into(),
                write_lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Serializes mutators on this store. Hold the guard until the
    /// mutation's [`save`](Self::save) has returned.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.inner.write_lock.lock().await
    }

    /// Reads the whole document, yielding the default value when the file
    /// does not exist yet. Repeated reads of a missing file keep returning
    /// the same default; nothing is written until the first explicit save.
    pub async fn load<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match fs::read(&self.inner.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => {
                tracing::error!("Failed to read store {}: {}", self.inner.path.display(), e);
                return Err(AppError::StoreWrite(e.to_string()));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Corrupt store {}: {}", self.inner.path.display(), e);
            AppError::StoreWrite(e.to_string())
        })
    }

    /// Rewrites the whole document: serialize, write to a sibling temp file,
    /// then rename over the target so the commit is all-or-nothing.
    pub async fn save<T: Serialize>(&self, value: &T) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;

        let tmp_path = self.inner.path.with_extension("tmp");
        fs::write(&tmp_path, &bytes).await.map_err(|e| {
            tracing::error!("Failed to write {}: {}", tmp_path.display(), e);
            AppError::StoreWrite(e.to_string())
        })?;
        fs::rename(&tmp_path, &self.inner.path).await.map_err(|e| {
            tracing::error!(
                "Failed to commit {} -> {}: {}",
                tmp_path.display(),
                self.inner.path.display(),
                e
            );
            AppError::StoreWrite(e.to_string())
        })
    }
}
