use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, path::PathBuf, str::FromStr};
use url::Url;

use crate::constants::DEFAULT_MAX_UPLOAD_BYTES;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Directory holding the JSON record stores (`about.json`, `projects.json`).
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Filesystem root for locally stored media blobs.
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,

    /// Public URL prefix under which locally stored blobs are served.
    #[serde(default = "default_media_public_base")]
    pub media_public_base: String,

    /// Remote media host upload endpoint; when set, uploads go there instead
    /// of the local filesystem.
    #[serde(default)]
    pub media_host_url: Option<Url>,

    #[serde(default)]
    pub media_host_key: Option<String>,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Content-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_media_root() -> PathBuf {
    PathBuf::from("public/uploads")
}
fn default_media_public_base() -> String {
    "/uploads".to_string()
}
fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", env_name.to_string().to_lowercase()))
                    .required(false),
            )
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Inject multi-word env values the separator cannot map.
        if config.media_host_url.is_none() {
            config.media_host_url = match env::var("APP_MEDIA_HOST_URL") {
                Ok(raw) => Some(Url::parse(&raw).map_err(|e| {
                    ConfigError::Message(format!("Invalid APP_MEDIA_HOST_URL: {}", e))
                })?),
                Err(_) => None,
            };
        }
        if config.media_host_key.is_none() {
            config.media_host_key = env::var("APP_MEDIA_HOST_KEY").ok();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.max_upload_bytes == 0 {
            errors.push("MAX_UPLOAD_BYTES must be greater than zero");
        }
        if self.media_public_base.trim().is_empty() {
            errors.push("MEDIA_PUBLIC_BASE cannot be empty");
        }
        if self.media_host_key.is_some() && self.media_host_url.is_none() {
            errors.push("MEDIA_HOST_KEY is set but MEDIA_HOST_URL is not");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("data_dir", &self.data_dir)
            .field("media_root", &self.media_root)
            .field("media_public_base", &self.media_public_base)
            .field("media_host_url", &self.media_host_url)
            .field(
                "media_host_key",
                &self.media_host_key.as_deref().map(|_| "[REDACTED]"),
            )
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}
