use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::get_projects))
                    .route(web::post().to(projects::mutate_projects)),
            )
            .service(
                web::resource("/display").route(web::get().to(projects::get_display_projects)),
            ),
    );
}
