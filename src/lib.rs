//! django-setup: scaffold Django projects from a declarative setup document.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CreateOutcome, GenerateOutcome, InstallReport, create, create_at, generate,
    generate_at, install, install_at,
};
pub use domain::{ProjectState, RawConfig, classify};
