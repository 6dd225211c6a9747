//! Shared testing utilities for django-setup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Output of the fake installer's `freeze`.
pub const FROZEN_REQUIREMENTS: &str = "Django==5.0.6\n";

/// Testing harness providing an isolated working directory and a fake `pip`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pip: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let pip = root.path().join("fake-pip");
        let log = root.path().join("pip.log");
        fs::write(
            &pip,
            format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\nif [ \"$1\" = \"freeze\" ]; then printf '{}'; fi\n",
                log.display(),
                FROZEN_REQUIREMENTS.replace('\n', "\\n")
            ),
        )
        .expect("Failed to write fake pip");
        make_executable(&pip);

        Self { root, work_dir, pip }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary in the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("django-setup").expect("Failed to locate django-setup binary");
        cmd.current_dir(&self.work_dir)
            .env("DJANGO_SETUP_PIP", &self.pip)
            .env_remove("DJANGO_SETUP_LOG");
        cmd
    }

    /// Write `setup.yaml` into the working directory.
    pub fn write_setup(&self, content: &str) {
        fs::write(self.work_dir.join("setup.yaml"), content).expect("Failed to write setup.yaml");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Every installer invocation so far, one argument line each.
    pub fn pip_calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("pip.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = fs::metadata(path).expect("Failed to stat fake pip").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).expect("Failed to chmod fake pip");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
