use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::{
    entities::media::{MediaKind, StoredMedia},
    errors::AppError,
};

pub mod cloud;
pub mod local;

/// Stores one binary blob and hands back a stable reference plus the kind
/// it was classified as. References stay resolvable without the adapter:
/// a relative path under the public static root, or an absolute URL on the
/// remote host. Blobs are never deleted here; the namespace is append-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store_media(
        &self,
        file_name: Option<String>,
        declared_mime: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<StoredMedia, AppError>;
}

/// Classifies an upload from its declared MIME type, sniffing the bytes as
/// a fallback when the client declared nothing usable.
pub fn classify_media(declared_mime: Option<&str>, bytes: &[u8]) -> Result<MediaKind, AppError> {
    let mime = match declared_mime.map(str::trim).filter(|m| !m.is_empty()) {
        Some(declared) => declared.to_ascii_lowercase(),
        None => infer::get(bytes)
            .map(|kind| kind.mime_type().to_string())
            .ok_or_else(|| {
                AppError::UnsupportedMedia("unable to determine the media type".to_string())
            })?,
    };

    MediaKind::from_mime(&mime).ok_or_else(|| {
        AppError::UnsupportedMedia(format!("{mime} is not an image or video type"))
    })
}

/// Rejects oversize payloads before any write is attempted.
pub fn ensure_within_limit(len: usize, max_bytes: usize) -> Result<(), AppError> {
    if len > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{len} bytes exceeds the {max_bytes} byte limit"
        )));
    }
    Ok(())
}

/// Collision-free blob key: sanitized original stem, millisecond timestamp
/// and a random suffix, keeping the original extension when there is one.
/// Two uploads of the same file therefore never share a reference.
pub fn unique_media_key(file_name: Option<&str>) -> String {
    let (stem, extension) = match file_name {
        Some(name) => {
            let path = Path::new(name);
            (
                path.file_stem().and_then(|s| s.to_str()).unwrap_or("upload"),
                path.extension().and_then(|e| e.to_str()),
            )
        }
        None => ("upload", None),
    };

    let stem: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();

    let token = format!(
        "{stem}-{}-{:09}",
        Utc::now().timestamp_millis(),
        rand::thread_rng().gen_range(0..1_000_000_000u32)
    );

    match extension {
        Some(ext) => format!("{token}.{}", ext.to_ascii_lowercase()),
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid PNG header, enough for byte sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn declared_mime_wins() {
        assert_eq!(
            classify_media(Some("video/mp4"), &[]).unwrap(),
            MediaKind::Video
        );
        assert_eq!(
            classify_media(Some("image/png"), &[]).unwrap(),
            MediaKind::Image
        );
    }

    #[test]
    fn unsupported_mime_is_rejected() {
        assert!(matches!(
            classify_media(Some("application/pdf"), &[]),
            Err(AppError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn missing_mime_falls_back_to_sniffing() {
        assert_eq!(classify_media(None, PNG_MAGIC).unwrap(), MediaKind::Image);
        assert!(matches!(
            classify_media(None, b"plain text"),
            Err(AppError::UnsupportedMedia(_))
        ));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(ensure_within_limit(100, 100).is_ok());
        assert!(matches!(
            ensure_within_limit(101, 100),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn keys_for_the_same_file_name_differ() {
        let a = unique_media_key(Some("demo.mp4"));
        let b = unique_media_key(Some("demo.mp4"));

        assert_ne!(a, b);
        assert!(a.starts_with("demo-"));
        assert!(a.ends_with(".mp4"));
    }

    #[test]
    fn key_sanitizes_awkward_file_names() {
        let key = unique_media_key(Some("Screen Recording 8:06 PM.mov"));
        assert!(key.starts_with("Screen_Recording_8_06_PM-"));
        assert!(key.ends_with(".mov"));

        let anonymous = unique_media_key(None);
        assert!(anonymous.starts_with("upload-"));
    }
}
