use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const TEMPLATE_SUFFIX: &str = ".template";

/// Project templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self, name: &str) -> Result<String, AppError> {
        TEMPLATES_DIR
            .get_file(format!("{}{}", name, TEMPLATE_SUFFIX))
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::TemplateNotFound(name.to_string()))
    }
}
