use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod about;
mod json_error;
mod projects;
mod upload;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(about::config_routes);
    cfg.configure(projects::config_routes);
    cfg.configure(upload::config_routes);

    cfg.configure(json_error::config_routes);
}
