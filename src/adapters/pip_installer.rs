use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{InstallOutcome, PackageInstaller};

/// Default installer program.
pub const PIP_PROGRAM: &str = "pip3";

/// Environment variable overriding the installer program.
pub const PIP_PROGRAM_ENV: &str = "DJANGO_SETUP_PIP";

/// `PackageInstaller` that shells out to pip, one blocking process per call.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    program: String,
    root: PathBuf,
}

impl PipInstaller {
    pub fn new(root: PathBuf) -> Self {
        Self::with_program(PIP_PROGRAM, root)
    }

    pub fn with_program(program: impl Into<String>, root: PathBuf) -> Self {
        Self { program: program.into(), root }
    }

    /// Use `$DJANGO_SETUP_PIP` when set, `pip3` otherwise.
    pub fn from_env(root: PathBuf) -> Self {
        match std::env::var(PIP_PROGRAM_ENV) {
            Ok(program) if !program.trim().is_empty() => Self::with_program(program.trim(), root),
            _ => Self::new(root),
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run with inherited stdio so pip's own progress stays visible.
    fn run(&self, target: &str, args: &[&str]) -> Result<InstallOutcome, AppError> {
        let command = self.command_line(args);
        debug!(%command, "running installer");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::Installer { command: command.clone(), details: e.to_string() })?;

        if !status.success() {
            warn!(%command, code = ?status.code(), "installer exited with failure");
        }

        Ok(InstallOutcome {
            target: target.to_string(),
            success: status.success(),
            exit_code: status.code(),
        })
    }
}

impl PackageInstaller for PipInstaller {
    fn install(&self, package: &str) -> Result<InstallOutcome, AppError> {
        self.run(package, &["install", package])
    }

    fn install_manifest(&self, manifest: &Path) -> Result<InstallOutcome, AppError> {
        let manifest = manifest.to_string_lossy().into_owned();
        self.run(&manifest, &["install", "-r", manifest.as_str()])
    }

    fn freeze(&self) -> Result<String, AppError> {
        let command = self.command_line(&["freeze"]);
        let output = Command::new(&self.program)
            .arg("freeze")
            .current_dir(&self.root)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| AppError::Installer { command: command.clone(), details: e.to_string() })?;

        if !output.status.success() {
            return Err(AppError::Installer {
                command,
                details: format!("exited with {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
