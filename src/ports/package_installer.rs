use std::path::Path;

use crate::domain::AppError;

/// Result of one installer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Package name or manifest path.
    pub target: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl InstallOutcome {
    pub fn succeeded(target: impl Into<String>) -> Self {
        Self { target: target.into(), success: true, exit_code: Some(0) }
    }
}

/// Port for the external package manager.
///
/// A non-zero exit is reported through `InstallOutcome`, not as an error;
/// `Err` means the installer could not be run at all.
pub trait PackageInstaller {
    /// Install one package by name.
    fn install(&self, package: &str) -> Result<InstallOutcome, AppError>;

    /// Install everything listed in a manifest file.
    fn install_manifest(&self, manifest: &Path) -> Result<InstallOutcome, AppError>;

    /// List installed packages in manifest format.
    fn freeze(&self) -> Result<String, AppError>;
}
