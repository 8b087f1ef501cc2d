use actix_web::{HttpResponse, web};

use crate::{
    AppState,
    entities::project::{ProjectCollection, ProjectMutation},
    errors::AppError,
};

/// Admin read path: the collection in storage order.
pub async fn get_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.get_all_projects().await?;
    Ok(HttpResponse::Ok().json(ProjectCollection { projects }))
}

/// Public read path: date-descending order with linkified descriptions.
pub async fn get_display_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.get_display_projects().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "projects": projects })))
}

pub async fn mutate_projects(
    state: web::Data<AppState>,
    mutation: web::Json<ProjectMutation>,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .project_handler
        .apply_mutation(mutation.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}
