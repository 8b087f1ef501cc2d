use crate::{
    entities::project::{MutationOutcome, Project, ProjectAction, ProjectMutation},
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::projection::{self, DisplayProject},
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// The collection in storage order, for the admin view.
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_all_projects().await
    }

    /// The date-descending, linkified view the public page renders.
    pub async fn get_display_projects(&self) -> Result<Vec<DisplayProject>, AppError> {
        let projects = self.project_repo.get_all_projects().await?;
        Ok(projection::display_projection(&projects))
    }

    /// Dispatches one admin mutation. Every arm answers with the full
    /// refreshed collection; update and delete require a project id.
    pub async fn apply_mutation(
        &self,
        mutation: ProjectMutation,
    ) -> Result<MutationOutcome, AppError> {
        match mutation.action {
            ProjectAction::Create => {
                let projects = self.project_repo.create_project(mutation.project).await?;
                Ok(MutationOutcome {
                    message: "Project created".to_string(),
                    projects,
                })
            }
            ProjectAction::Update => {
                let id = mutation.project.require_id()?;
                let projects = self
                    .project_repo
                    .update_project(&id, mutation.project)
                    .await?;
                Ok(MutationOutcome {
                    message: "Project updated".to_string(),
                    projects,
                })
            }
            ProjectAction::Delete => {
                let id = mutation.project.require_id()?;
                let projects = self.project_repo.delete_project(&id).await?;
                Ok(MutationOutcome {
                    message: "Project deleted".to_string(),
                    projects,
                })
            }
        }
    }
}
