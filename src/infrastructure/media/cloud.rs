use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use super::{MediaStore, classify_media, ensure_within_limit, unique_media_key};
use crate::{
    entities::media::StoredMedia,
    errors::AppError,
};

/// Remote media host backend (Cloudinary-style upload endpoint): the blob
/// is POSTed as a multipart form and the host answers with the public URL
/// that becomes the stored reference.
pub struct CloudMediaStore {
    client: reqwest::Client,
    upload_url: Url,
    api_key: Option<String>,
    max_bytes: usize,
}

#[derive(Debug, Deserialize)]
struct CloudUploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

impl CloudMediaStore {
    pub fn new(upload_url: Url, api_key: Option<String>, max_bytes: usize) -> Self {
        CloudMediaStore {
            client: reqwest::Client::new(),
            upload_url,
            api_key,
            max_bytes,
        }
    }
}

#[async_trait]
impl MediaStore for CloudMediaStore {
    async fn store_media(
        &self,
        file_name: Option<String>,
        declared_mime: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<StoredMedia, AppError> {
        ensure_within_limit(bytes.len(), self.max_bytes)?;
        let media_type = classify_media(declared_mime.as_deref(), &bytes)?;

        let key = unique_media_key(file_name.as_deref());
        let mut part = Part::bytes(bytes).file_name(key.clone());
        if let Some(mime) = declared_mime.as_deref() {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::UnsupportedMedia(e.to_string()))?;
        }

        let form = Form::new()
            .text("public_id", key)
            .text("resource_type", media_type.to_string())
            .part("file", part);

        let mut request = self.client.post(self.upload_url.clone()).multipart(form);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Media host request failed: {}", e);
            AppError::Upload(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Media host returned {}: {}", status, body);
            return Err(AppError::Upload(format!("media host returned {status}")));
        }

        let body: CloudUploadResponse = response.json().await.map_err(|e| {
            tracing::error!("Unreadable media host response: {}", e);
            AppError::Upload(e.to_string())
        })?;

        let url = body
            .secure_url
            .or(body.url)
            .ok_or_else(|| AppError::Upload("media host response carried no URL".to_string()))?;

        Ok(StoredMedia { url, media_type })
    }
}
