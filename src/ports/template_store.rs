use crate::domain::AppError;

/// Port for loading raw template text by logical name.
pub trait TemplateStore {
    /// Text of `<name>.template`, or `TemplateNotFound`.
    fn load(&self, name: &str) -> Result<String, AppError>;
}
