use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Coarse classification of an uploaded blob. Anything that is neither an
/// image nor a video is rejected before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[display("image")]
    Image,

    #[display("video")]
    Video,
}

impl MediaKind {
    /// Classifies from a MIME type string: `video/*` wins over `image/*`,
    /// everything else is unsupported.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

/// Result of storing one blob: a stable reference resolvable without the
/// adapter, plus the kind the blob was classified as.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    pub url: String,
    pub media_type: MediaKind,
}
