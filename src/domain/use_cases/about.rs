use crate::{
    entities::about::{AboutContent, UpdateAboutRequest},
    errors::AppError,
    repositories::about::AboutRepository,
};

pub struct AboutHandler<R>
where
    R: AboutRepository,
{
    pub about_repo: R,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository,
{
    pub fn new(about_repo: R) -> Self {
        AboutHandler { about_repo }
    }

    /// Retrieves the "about" text, defaulting to empty on first access.
    pub async fn get_about(&self) -> Result<AboutContent, AppError> {
        self.about_repo.get_about().await
    }

    /// Overwrites the "about" text wholesale and echoes the stored value.
    pub async fn update_about(
        &self,
        request: UpdateAboutRequest,
    ) -> Result<AboutContent, AppError> {
        let about = AboutContent {
            content: request.content,
        };
        self.about_repo.save_about(&about).await?;
        Ok(about)
    }
}
