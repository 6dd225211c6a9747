mod mock_project_fs;
mod recording_installer;
mod recording_reporter;
mod scripted_prompter;

pub use mock_project_fs::MockProjectFs;
pub use recording_installer::RecordingInstaller;
pub use recording_reporter::RecordingReporter;
pub use scripted_prompter::ScriptedPrompter;
