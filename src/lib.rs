use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, media, utils};

use db::json_store::JsonStore;
use media::{MediaStore, cloud::CloudMediaStore, local::LocalMediaStore};
use repositories::json_repo::{JsonAboutRepo, JsonProjectRepo};
use use_cases::{about::AboutHandler, projects::ProjectHandler};

pub struct AppState {
    pub about_handler: AppAboutHandler,
    pub project_handler: AppProjectHandler,
    pub media_store: Arc<dyn MediaStore>,
    pub max_upload_bytes: usize,
}

pub type AppAboutHandler = AboutHandler<JsonAboutRepo>;
pub type AppProjectHandler = ProjectHandler<JsonProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let about_store = JsonStore::new(config.data_dir.join(constants::ABOUT_STORE_FILE));
        let project_store = JsonStore::new(config.data_dir.join(constants::PROJECTS_STORE_FILE));

        let media_store: Arc<dyn MediaStore> = match &config.media_host_url {
            Some(url) => Arc::new(CloudMediaStore::new(
                url.clone(),
                config.media_host_key.clone(),
                config.max_upload_bytes,
            )),
            None => Arc::new(LocalMediaStore::new(
                config.media_root.clone(),
                config.media_public_base.clone(),
                config.max_upload_bytes,
            )),
        };

        AppState {
            about_handler: AboutHandler::new(JsonAboutRepo::new(about_store)),
            project_handler: ProjectHandler::new(JsonProjectRepo::new(project_store)),
            media_store,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
