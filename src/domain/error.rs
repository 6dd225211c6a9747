use std::io;

use thiserror::Error;

/// Library-wide error type for django-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A database or cache section does not match its schema.
    #[error("Invalid Config Data - {section}: {details}")]
    InvalidConfig { section: String, details: String },

    /// Structured document could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Project source directory is already present.
    #[error("Project with Source Directory already exists: {0}")]
    ProjectExists(String),

    /// Embedded template is missing from the binary.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Interactive input failed.
    #[error("Failed to read answer: {0}")]
    Prompt(String),

    /// The package installer could not be launched.
    #[error("Installer error running '{command}': {details}")]
    Installer { command: String, details: String },

    /// Path escapes the project root.
    #[error("Path traversal rejected: {0}")]
    PathTraversal(String),
}

impl AppError {
    pub fn invalid_config<S: Into<String>, D: Into<String>>(section: S, details: D) -> Self {
        AppError::InvalidConfig { section: section.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig { .. }
            | AppError::ParseError { .. }
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::ProjectExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::Installer { .. } => io::ErrorKind::Other,
        }
    }

    /// Whether the error is the user's to fix rather than a packaging defect.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AppError::TemplateNotFound(_))
    }
}
