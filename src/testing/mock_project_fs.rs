//! Test double for `ProjectFilesystem`.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory implementation of `ProjectFilesystem` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MockProjectFs {
    files: Arc<Mutex<HashMap<String, String>>>,
    dirs: Arc<Mutex<BTreeSet<String>>>,
}

#[allow(dead_code)]
impl MockProjectFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before handing the double to production code.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn file_paths(&self) -> BTreeSet<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn created_dirs(&self) -> BTreeSet<String> {
        self.dirs.lock().unwrap().clone()
    }
}

impl ProjectFilesystem for MockProjectFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        if self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path) {
            return true;
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        self.files.lock().unwrap().keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir(&self, path: &str) -> Result<(), AppError> {
        if !self.dirs.lock().unwrap().insert(path.to_string()) {
            return Err(AppError::ProjectExists(path.to_string()));
        }
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
