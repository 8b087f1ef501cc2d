use async_trait::async_trait;

use crate::{
    db::json_store::JsonStore,
    entities::project::{Project, ProjectCollection, ProjectDraft},
    errors::AppError,
    repositories::json_repo::JsonProjectRepo,
};

/// Durable home of the project collection. Every mutating operation runs a
/// whole read-modify-write cycle under the store's writer lock and answers
/// with the full refreshed collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// The collection in storage (insertion) order; never mutates.
    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Appends a new record built from the draft; the draft must carry
    /// `title`, `description` and `date`.
    async fn create_project(&self, draft: ProjectDraft) -> Result<Vec<Project>, AppError>;

    /// Merges the draft into the record with the given id.
    async fn update_project(&self, id: &str, draft: ProjectDraft)
        -> Result<Vec<Project>, AppError>;

    /// Removes the record with the given id.
    async fn delete_project(&self, id: &str) -> Result<Vec<Project>, AppError>;
}

impl JsonProjectRepo {
    pub fn new(store: JsonStore) -> Self {
        JsonProjectRepo { store }
    }
}

#[async_trait]
impl ProjectRepository for JsonProjectRepo {
    async fn get_all_projects(&self) -> Result<Vec<Project>, AppError> {
        let collection: ProjectCollection = self.store.load().await?;
        Ok(collection.projects)
    }

    async fn create_project(&self, draft: ProjectDraft) -> Result<Vec<Project>, AppError> {
        let _guard = self.store.write_guard().await;

        let mut collection: ProjectCollection = self.store.load().await?;
        let project = Project::from_draft(draft, &collection.projects)?;
        collection.projects.push(project);

        self.store.save(&collection).await?;
        Ok(collection.projects)
    }

    async fn update_project(
        &self,
        id: &str,
        draft: ProjectDraft,
    ) -> Result<Vec<Project>, AppError> {
        let _guard = self.store.write_guard().await;

        let mut collection: ProjectCollection = self.store.load().await?;
        let project = collection
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No project with id {id}")))?;
        project.apply_draft(draft)?;

        self.store.save(&collection).await?;
        Ok(collection.projects)
    }

    async fn delete_project(&self, id: &str) -> Result<Vec<Project>, AppError> {
        let _guard = self.store.write_guard().await;

        let mut collection: ProjectCollection = self.store.load().await?;
        let before = collection.projects.len();
        collection.projects.retain(|p| p.id != id);
        if collection.projects.len() == before {
            // Nothing removed: leave the stored collection untouched.
            return Err(AppError::NotFound(format!("No project with id {id}")));
        }

        self.store.save(&collection).await?;
        Ok(collection.projects)
    }
}
