pub mod catalog;
pub mod error;
pub mod project_paths;
pub mod project_state;
pub mod question;
pub mod raw_config;
pub mod secret_key;
pub mod secrets;
pub mod sections;
pub mod template;

pub use catalog::{CacheBackend, DatabaseEngine, Library};
pub use error::AppError;
pub use project_state::{ProjectFlags, ProjectState};
pub use raw_config::RawConfig;
pub use secrets::{Classification, Classifier, classify};
pub use sections::{CacheConfig, DatabaseConfig};
pub use template::TemplateFile;
