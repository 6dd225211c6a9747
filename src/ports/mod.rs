mod package_installer;
mod project_filesystem;
mod prompter;
mod reporter;
mod template_store;

pub use package_installer::{InstallOutcome, PackageInstaller};
pub use project_filesystem::ProjectFilesystem;
pub use prompter::Prompter;
pub use reporter::Reporter;
pub use template_store::TemplateStore;
