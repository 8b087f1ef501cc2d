use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Upload ceiling applied when no policy value is configured (100 MB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

pub const ABOUT_STORE_FILE: &str = "about.json";
pub const PROJECTS_STORE_FILE: &str = "projects.json";
