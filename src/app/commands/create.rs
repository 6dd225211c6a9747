//! Create command: the full project pipeline as a fixed, ordered task list.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::commands::generate::write_documents;
use crate::app::commands::install::{self, InstallReport};
use crate::domain::project_paths::{
    REQUIREMENTS_FILE, SOURCE_DIR, app_dir, media_dir, static_dir, template_dir,
};
use crate::domain::template::{project_files, render};
use crate::domain::{AppError, Classification, ProjectState, classify};
use crate::ports::{PackageInstaller, ProjectFilesystem, Reporter, TemplateStore};

/// One step of project creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTask {
    WriteDocuments,
    CreateDirectories,
    InstallLibraries,
    RenderFiles,
    FreezeRequirements,
}

impl CreateTask {
    /// Execution order.
    pub const ALL: [CreateTask; 5] = [
        CreateTask::WriteDocuments,
        CreateTask::CreateDirectories,
        CreateTask::InstallLibraries,
        CreateTask::RenderFiles,
        CreateTask::FreezeRequirements,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CreateTask::WriteDocuments => "Writing Setup Files",
            CreateTask::CreateDirectories => "Creating Source Folder",
            CreateTask::InstallLibraries => "Installing Libraries",
            CreateTask::RenderFiles => "Creating Project File",
            CreateTask::FreezeRequirements => "Creating Requirement File",
        }
    }
}

/// What `create` left on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateOutcome {
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub install: InstallReport,
}

/// Directories created for a project, parents first.
pub fn project_directories(state: &ProjectState) -> Vec<String> {
    let mut dirs = vec![SOURCE_DIR.to_string(), app_dir(&state.identifier())];
    if state.flags.r#static {
        dirs.push(static_dir());
    }
    if state.flags.media_files {
        dirs.push(media_dir());
    }
    if state.flags.template {
        dirs.push(template_dir());
    }
    dirs
}

/// Run every task in order.
///
/// The first failing task aborts the rest; nothing already written is rolled back.
pub fn execute<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    state: &ProjectState,
) -> Result<CreateOutcome, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    let classification = classify(state);
    let mut outcome = CreateOutcome::default();

    for (index, task) in CreateTask::ALL.iter().enumerate() {
        ctx.reporter().step(index + 1, task.title());
        debug!(?task, "running create task");
        run_task(ctx, *task, state, &classification, &mut outcome)?;
    }

    info!(project = %state.name, files = outcome.files.len(), "project created");
    Ok(outcome)
}

fn run_task<F, T, I, R>(
    ctx: &AppContext<F, T, I, R>,
    task: CreateTask,
    state: &ProjectState,
    classification: &Classification,
    outcome: &mut CreateOutcome,
) -> Result<(), AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
    I: PackageInstaller,
    R: Reporter,
{
    match task {
        CreateTask::WriteDocuments => {
            let generated = write_documents(ctx.fs(), classification)?;
            outcome.files.extend(generated.files);
        }
        CreateTask::CreateDirectories => {
            for dir in project_directories(state) {
                ctx.fs().create_dir(&dir)?;
                outcome.directories.push(dir);
            }
        }
        CreateTask::InstallLibraries => {
            outcome.install = install::execute(ctx, state)?;
        }
        CreateTask::RenderFiles => {
            let identifier = state.identifier();
            for file in project_files(state, &classification.config_vars()) {
                let template = ctx.templates().load(&file.name)?;
                let destination = file.destination();
                ctx.fs().write_file(&destination, &render(&template, &file.substitutions, &identifier))?;
                outcome.files.push(destination);
            }
        }
        CreateTask::FreezeRequirements => {
            let frozen = ctx.installer().freeze()?;
            ctx.fs().write_file(REQUIREMENTS_FILE, &frozen)?;
            outcome.files.push(REQUIREMENTS_FILE.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedTemplateStore;
    use crate::domain::RawConfig;
    use crate::domain::project_paths::{SECRET_FILE, SETUP_CONFIG_FILE};
    use crate::testing::{MockProjectFs, RecordingInstaller, RecordingReporter};

    type TestContext =
        AppContext<MockProjectFs, EmbeddedTemplateStore, RecordingInstaller, RecordingReporter>;

    fn context(fs: MockProjectFs, installer: RecordingInstaller) -> TestContext {
        AppContext::new(fs, EmbeddedTemplateStore::new(), installer, RecordingReporter::new())
    }

    fn state(content: &str) -> ProjectState {
        ProjectState::normalize_with(RawConfig::parse(content, "setup.yaml").unwrap(), &|_| None)
            .unwrap()
    }

    #[test]
    fn runs_tasks_in_order_with_progress_lines() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new().with_freeze("Django==5.0\n"));

        execute(&ctx, &state("name: Proj1\n")).unwrap();

        assert_eq!(
            ctx.reporter().steps(),
            vec![
                "1.. Writing Setup Files",
                "2.. Creating Source Folder",
                "3.. Installing Libraries",
                "4.. Creating Project File",
                "5.. Creating Requirement File",
            ]
        );
        assert_eq!(fs.content(REQUIREMENTS_FILE).as_deref(), Some("Django==5.0\n"));
    }

    #[test]
    fn writes_documents_directories_and_project_files() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new());

        let outcome = execute(&ctx, &state("name: My Site\ntemplate: false\n")).unwrap();

        assert_eq!(outcome.directories, vec!["src", "src/My_Site", "src/static", "src/media"]);
        let paths = fs.file_paths();
        for expected in [
            SETUP_CONFIG_FILE,
            SECRET_FILE,
            "src/My_Site/settings.py",
            "src/My_Site/config.py",
            "src/My_Site/__init__.py",
            "src/manage.py",
            "src/.gitignore",
        ] {
            assert!(paths.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn rendered_settings_carry_library_registrations() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new());

        execute(&ctx, &state("name: Proj1\nlibraries: [django-rest-framework]\n")).unwrap();

        let settings = fs.content("src/Proj1/settings.py").unwrap();
        assert!(settings.contains("'rest_framework',"));
        assert!(settings.contains("'corsheaders',"));
        assert!(settings.contains("corsheaders.middleware.CorsMiddleware"));
        assert!(!settings.contains("$INSTALLED_APPS"));
        assert!(!settings.contains("$PROJECT_NAME"));

        let config = fs.content("src/Proj1/config.py").unwrap();
        assert!(config.contains("DATABASE_CONFIG = {"));
        assert!(config.contains("os.environ.get('DATABASE_ENGINE', '')"));
    }

    #[test]
    fn existing_source_directory_aborts_remaining_tasks() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new());
        let state = state("name: Proj1\n");

        execute(&ctx, &state).unwrap();
        let err = execute(&ctx, &state).unwrap_err();

        assert!(matches!(err, AppError::ProjectExists(ref dir) if dir == "src"));
        assert_eq!(ctx.reporter().steps().last().map(String::as_str), Some("2.. Creating Source Folder"));
        // only the first run reached the installer
        assert_eq!(ctx.installer().calls(), vec!["freeze"]);
    }

    #[test]
    fn install_failures_do_not_stop_creation() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new().failing("celery"));

        let outcome = execute(&ctx, &state("name: p\nlibraries: [celery]\n")).unwrap();

        assert!(!outcome.install.is_clean());
        assert!(fs.content(REQUIREMENTS_FILE).is_some());
        assert_eq!(ctx.reporter().warnings().len(), 1);
    }

    #[test]
    fn channels_adds_routing_module() {
        let fs = MockProjectFs::new();
        let ctx = context(fs.clone(), RecordingInstaller::new());

        execute(&ctx, &state("name: chat\nlibraries: [django-channels]\n")).unwrap();

        assert!(fs.file_paths().contains("src/chat/routing.py"));
        let settings = fs.content("src/chat/settings.py").unwrap();
        assert!(settings.contains("ASGI_APPLICATION"));
        assert!(settings.contains("chat.routing"));
    }
}
