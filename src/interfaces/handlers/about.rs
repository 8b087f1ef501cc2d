use actix_web::{HttpResponse, web};

use crate::{AppState, entities::about::UpdateAboutRequest, errors::AppError};

pub async fn get_about(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let about = state.about_handler.get_about().await?;
    Ok(HttpResponse::Ok().json(about))
}

pub async fn update_about(
    state: web::Data<AppState>,
    request: web::Json<UpdateAboutRequest>,
) -> Result<HttpResponse, AppError> {
    let about = state.about_handler.update_about(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(about))
}
