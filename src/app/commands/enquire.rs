//! Resolve the project state from `setup.yaml` or, failing that, from questions.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::config::load_setup_config;
use crate::domain::project_paths::SECRET_FILE;
use crate::domain::question::enquire;
use crate::domain::secrets::parse_secret_file;
use crate::domain::{AppError, ProjectState, RawConfig};
use crate::ports::{PackageInstaller, ProjectFilesystem, Prompter, Reporter, TemplateStore};

/// Build the project state for this invocation.
///
/// A name given on the command line overrides the document's name.
/// `$NAME` placeholders resolve from the process environment first, then from
/// the secret file a previous run left behind.
pub fn execute<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    prompter: &impl Prompter,
    project_name: Option<&str>,
) -> Result<ProjectState, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    let raw = collect_answers(ctx, prompter, project_name)?;
    let secrets = read_secret_file(ctx.fs());
    ProjectState::normalize_with(raw, &|name| {
        std::env::var(name).ok().or_else(|| secrets.get(name).cloned())
    })
}

fn read_secret_file(fs: &impl ProjectFilesystem) -> IndexMap<String, String> {
    if !fs.file_exists(SECRET_FILE) {
        return IndexMap::new();
    }
    match fs.read_file(SECRET_FILE) {
        Ok(content) => parse_secret_file(&content),
        Err(err) => {
            debug!(error = %err, "secret file not readable");
            IndexMap::new()
        }
    }
}

fn collect_answers<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    prompter: &impl Prompter,
    project_name: Option<&str>,
) -> Result<RawConfig, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    let project_name = project_name.map(str::trim).filter(|name| !name.is_empty());

    let mut raw = load_setup_config(ctx.fs(), ctx.reporter());
    if raw.is_empty() {
        info!("no usable setup document, asking questions");
        return enquire(prompter, project_name);
    }

    if let Some(name) = project_name {
        raw.insert("name", name);
    }
    Ok(raw)
}
