//! Generate command: write the redacted setup document and its secret file.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::project_paths::{SECRET_FILE, SETUP_CONFIG_FILE};
use crate::domain::{AppError, Classification, ProjectState, classify};
use crate::ports::{PackageInstaller, ProjectFilesystem, Reporter, TemplateStore};

/// Files written by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub files: Vec<String>,
    /// Names of the variables written to the secret file.
    pub secrets: Vec<String>,
}

/// Classify the state and write both documents.
pub fn execute<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    state: &ProjectState,
) -> Result<GenerateOutcome, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    let classification = classify(state);
    write_documents(ctx.fs(), &classification)
}

/// Write `setup.yaml` and `.env`, overwriting previous runs.
pub(crate) fn write_documents(
    fs: &impl ProjectFilesystem,
    classification: &Classification,
) -> Result<GenerateOutcome, AppError> {
    fs.write_file(SETUP_CONFIG_FILE, &classification.to_yaml()?)?;
    fs.write_file(SECRET_FILE, &classification.secret_file())?;
    debug!(secrets = classification.secrets.len(), "wrote setup documents");

    Ok(GenerateOutcome {
        files: vec![SETUP_CONFIG_FILE.to_string(), SECRET_FILE.to_string()],
        secrets: classification.secrets.iter().map(|entry| entry.name.clone()).collect(),
    })
}
