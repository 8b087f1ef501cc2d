use actix_web::web;

use crate::errors::AppError;

/// Malformed or mistyped JSON bodies answer with the same JSON error shape
/// as everything else instead of actix's plain-text default.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::validation("body", &err.to_string()).into()
    }));
}
