use crate::ports::{PackageInstaller, ProjectFilesystem, Reporter, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F, T, I, R>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    fs: F,
    templates: T,
    installer: I,
    reporter: R,
}

impl<F, T, I, R> AppContext<F, T, I, R>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    /// Create a new application context.
    pub fn new(fs: F, templates: T, installer: I, reporter: R) -> Self {
        Self { fs, templates, installer, reporter }
    }

    /// Get a reference to the project filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the package installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }

    /// Get a reference to the progress reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
