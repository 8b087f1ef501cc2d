use async_trait::async_trait;

use crate::{
    db::json_store::JsonStore,
    entities::about::AboutContent,
    errors::AppError,
    repositories::json_repo::JsonAboutRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Retrieves the singleton, defaulting to empty content when no record
    /// has been written yet.
    async fn get_about(&self) -> Result<AboutContent, AppError>;

    /// Overwrites the singleton wholesale.
    async fn save_about(&self, about: &AboutContent) -> Result<(), AppError>;
}

impl JsonAboutRepo {
    pub fn new(store: JsonStore) -> Self {
        JsonAboutRepo { store }
    }
}

#[async_trait]
impl AboutRepository for JsonAboutRepo {
    async fn get_about(&self) -> Result<AboutContent, AppError> {
        self.store.load().await
    }

    async fn save_about(&self, about: &AboutContent) -> Result<(), AppError> {
        let _guard = self.store.write_guard().await;
        self.store.save(about).await
    }
}
