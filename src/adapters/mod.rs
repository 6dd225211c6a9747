pub mod console_reporter;
pub mod dialoguer_prompter;
pub mod embedded_template_store;
pub mod env_file;
pub mod filesystem;
pub mod pip_installer;

pub use console_reporter::ConsoleReporter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use filesystem::FilesystemStore;
pub use pip_installer::PipInstaller;
