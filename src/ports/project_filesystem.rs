//! Filesystem operations scoped to the directory a project is generated in.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for project filesystem operations.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create exactly one directory. Fails with `ProjectExists` when it is already there.
    fn create_dir(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
