//! Loading `KEY=VALUE` environment files into the process environment.

use std::path::Path;

use tracing::debug;

use crate::domain::project_paths::DEFAULT_ENV_FILE;

/// Outcome of loading an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded,
    /// The conventional default file is absent; nothing to report.
    DefaultMissing,
    /// A user-named file could not be loaded.
    Failed(String),
}

/// Load `<root>/<file>` without overriding variables that are already set.
pub fn load_env_file(root: &Path, file: &str) -> EnvFileStatus {
    let path = root.join(file);
    match dotenvy::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded environment file");
            EnvFileStatus::Loaded
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound && file == DEFAULT_ENV_FILE => {
            debug!(path = %path.display(), "default environment file not present");
            EnvFileStatus::DefaultMissing
        }
        Err(err) => EnvFileStatus::Failed(format!("Invalid env file {}: {}", path.display(), err)),
    }
}
