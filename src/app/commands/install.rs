//! Install command: every requested and derived package, then the manifest.

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::project_paths::REQUIREMENTS_FILE;
use crate::domain::{AppError, ProjectState};
use crate::ports::{InstallOutcome, PackageInstaller, ProjectFilesystem, Reporter, TemplateStore};

/// Result of one install pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn failures(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.success)
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Install `libraries ∪ required`, then `requirements.txt` when present.
///
/// Non-zero installer exits are reported as warnings and do not stop the pass.
pub fn execute<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    state: &ProjectState,
) -> Result<InstallReport, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    let mut report = InstallReport::default();

    for package in state.all_libraries() {
        report.outcomes.push(ctx.installer().install(package)?);
    }

    if ctx.fs().file_exists(REQUIREMENTS_FILE) {
        let manifest = ctx.fs().resolve_path(REQUIREMENTS_FILE);
        report.outcomes.push(ctx.installer().install_manifest(&manifest)?);
    } else {
        debug!("no {} to install from", REQUIREMENTS_FILE);
    }

    for failure in report.failures() {
        let code = failure.exit_code.map_or_else(|| "signal".to_string(), |code| code.to_string());
        warn!(package = %failure.target, %code, "install failed");
        ctx.reporter().warn(&format!("Failed to install {} (exit status {})", failure.target, code));
    }

    Ok(report)
}
