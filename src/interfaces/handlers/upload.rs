use actix_multipart::{MultipartError, form::{MultipartForm, tempfile::TempFile}};
use actix_web::{HttpResponse, web};
use tokio::fs;

use crate::{AppState, errors::AppError, media::ensure_within_limit};

#[derive(Debug, MultipartForm)]
pub struct MediaUploadForm {
    #[multipart(rename = "file", limit = "100MB")]
    pub file: TempFile,
}

/// Accepts one `file` multipart field, classifies and stores it, and hands
/// back the reference the admin client merges into its draft.
pub async fn upload_media(
    state: web::Data<AppState>,
    form: Result<MultipartForm<MediaUploadForm>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => return Err(map_multipart_error(e)),
    };
    let file = form.file;

    // Fail fast against the configured policy before touching the payload.
    ensure_within_limit(file.size, state.max_upload_bytes)?;

    let declared_mime = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().to_string());

    let bytes = fs::read(file.file.path()).await.map_err(|e| {
        tracing::error!("Failed to read uploaded temp file: {}", e);
        AppError::Upload(e.to_string())
    })?;

    let stored = state
        .media_store
        .store_media(file.file_name, declared_mime, bytes)
        .await?;

    Ok(HttpResponse::Ok().json(stored))
}

fn map_multipart_error(e: actix_web::Error) -> AppError {
    if let Some(err) = e.as_error::<MultipartError>() {
        return match err {
            MultipartError::Payload(_) => {
                AppError::PayloadTooLarge("file exceeds the upload size limit".to_string())
            }
            MultipartError::ContentTypeIncompatible => AppError::validation(
                "file",
                "request must be multipart/form-data with a single file field",
            ),
            other => AppError::validation("file", &other.to_string()),
        };
    }
    AppError::validation("file", &e.to_string())
}
