//! Test double for `PackageInstaller` that records every call.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{InstallOutcome, PackageInstaller};

#[derive(Debug, Default)]
pub struct RecordingInstaller {
    calls: RefCell<Vec<String>>,
    failing: HashSet<String>,
    frozen: String,
}

#[allow(dead_code)]
impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs of `target` exit non-zero.
    pub fn failing(mut self, target: &str) -> Self {
        self.failing.insert(target.to_string());
        self
    }

    pub fn with_freeze(mut self, output: &str) -> Self {
        self.frozen = output.to_string();
        self
    }

    /// `install <pkg>`, `install -r <manifest>` and `freeze`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn outcome(&self, target: &str) -> InstallOutcome {
        if self.failing.contains(target) {
            InstallOutcome { target: target.to_string(), success: false, exit_code: Some(1) }
        } else {
            InstallOutcome::succeeded(target)
        }
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, package: &str) -> Result<InstallOutcome, AppError> {
        self.calls.borrow_mut().push(format!("install {}", package));
        Ok(self.outcome(package))
    }

    fn install_manifest(&self, manifest: &Path) -> Result<InstallOutcome, AppError> {
        let target = manifest.to_string_lossy().into_owned();
        self.calls.borrow_mut().push(format!("install -r {}", target));
        Ok(self.outcome(&target))
    }

    fn freeze(&self) -> Result<String, AppError> {
        self.calls.borrow_mut().push("freeze".to_string());
        Ok(self.frozen.clone())
    }
}
