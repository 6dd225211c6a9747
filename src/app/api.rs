//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::env_file::{EnvFileStatus, load_env_file};
use crate::adapters::{
    ConsoleReporter, DialoguerPrompter, EmbeddedTemplateStore, FilesystemStore, PipInstaller,
};
use crate::app::{
    AppContext,
    commands::{create, enquire, generate, install},
};
use crate::domain::ProjectState;
use crate::ports::Reporter;

pub use crate::app::commands::create::CreateOutcome;
pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::app::commands::install::InstallReport;
pub use crate::domain::AppError;

type CliContext = AppContext<FilesystemStore, EmbeddedTemplateStore, PipInstaller, ConsoleReporter>;

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> CliContext {
    AppContext::new(
        FilesystemStore::new(path.clone()),
        EmbeddedTemplateStore::new(),
        PipInstaller::from_env(path),
        ConsoleReporter::new(),
    )
}

/// Load `--env` before anything reads the environment.
fn load_cli_env(root: &Path, env_file: &str, reporter: &impl Reporter) {
    if let EnvFileStatus::Failed(message) = load_env_file(root, env_file) {
        reporter.warn(&message);
    }
}

fn resolve_state(ctx: &CliContext, project_name: Option<&str>) -> Result<ProjectState, AppError> {
    enquire::execute(ctx, &DialoguerPrompter::new(), project_name)
}

/// Write `setup.yaml` and `.env` in the current directory.
pub fn generate(project_name: Option<&str>, env_file: &str) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, project_name, env_file)
}

/// Write `setup.yaml` and `.env` in the specified directory.
pub fn generate_at(
    path: impl Into<PathBuf>,
    project_name: Option<&str>,
    env_file: &str,
) -> Result<GenerateOutcome, AppError> {
    let path = path.into();
    let ctx = create_context(path.clone());
    load_cli_env(&path, env_file, ctx.reporter());

    let state = resolve_state(&ctx, project_name)?;
    generate::execute(&ctx, &state)
}

/// Create a full project in the current directory.
pub fn create(project_name: Option<&str>, env_file: &str) -> Result<CreateOutcome, AppError> {
    create_at(std::env::current_dir()?, project_name, env_file)
}

/// Create a full project in the specified directory.
pub fn create_at(
    path: impl Into<PathBuf>,
    project_name: Option<&str>,
    env_file: &str,
) -> Result<CreateOutcome, AppError> {
    let path = path.into();
    let ctx = create_context(path.clone());
    load_cli_env(&path, env_file, ctx.reporter());

    let state = resolve_state(&ctx, project_name)?;
    create::execute(&ctx, &state)
}

/// Install the project's libraries and manifest from the current directory.
pub fn install(project_name: Option<&str>, env_file: &str) -> Result<InstallReport, AppError> {
    install_at(std::env::current_dir()?, project_name, env_file)
}

/// Install the project's libraries and manifest from the specified directory.
pub fn install_at(
    path: impl Into<PathBuf>,
    project_name: Option<&str>,
    env_file: &str,
) -> Result<InstallReport, AppError> {
    let path = path.into();
    let ctx = create_context(path.clone());
    load_cli_env(&path, env_file, ctx.reporter());

    let state = resolve_state(&ctx, project_name)?;
    install::execute(&ctx, &state)
}
