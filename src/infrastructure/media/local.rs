use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::{MediaStore, classify_media, ensure_within_limit, unique_media_key};
use crate::{
    entities::media::StoredMedia,
    errors::AppError,
};

/// Filesystem-backed media store. Blobs land under `root` and are addressed
/// as `{public_base}/{key}`; serving the files is the static layer's job.
pub struct LocalMediaStore {
    root: PathBuf,
    public_base: String,
    max_bytes: usize,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf, public_base: String, max_bytes: usize) -> Self {
        LocalMediaStore {
            root,
            public_base: public_base.trim_end_matches('/').to_string(),
            max_bytes,
        }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store_media(
        &self,
        file_name: Option<String>,
        declared_mime: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<StoredMedia, AppError> {
        ensure_within_limit(bytes.len(), self.max_bytes)?;
        let media_type = classify_media(declared_mime.as_deref(), &bytes)?;

        let key = unique_media_key(file_name.as_deref());
        let blob_path = self.root.join(&key);

        fs::write(&blob_path, &bytes).await.map_err(|e| {
            tracing::error!("Failed to write blob {}: {}", blob_path.display(), e);
            AppError::Upload(e.to_string())
        })?;

        tracing::info!(
            "Stored {} blob {} ({} bytes)",
            media_type,
            blob_path.display(),
            bytes.len()
        );

        Ok(StoredMedia {
            url: format!("{}/{}", self.public_base, key),
            media_type,
        })
    }
}
