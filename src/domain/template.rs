//! Placeholder substitution and the set of files generated for a project.

use crate::domain::catalog::{CacheBackend, DatabaseEngine};
use crate::domain::project_paths::{SOURCE_DIR, app_dir};
use crate::domain::project_state::ProjectState;

/// Placeholder always bound to the project identifier.
pub const PROJECT_NAME_KEY: &str = "PROJECT_NAME";

const STATIC_FILE_SETTINGS: &str = "STATICFILES_DIRS = [BASE_DIR / 'static']";
const MEDIA_FILE_SETTINGS: &str = "MEDIA_URL = '/media/'\nMEDIA_ROOT = BASE_DIR / 'media'";
const TEMPLATE_SETTINGS: &str = "BASE_DIR / 'template'";
const CACHE_SETTINGS: &str = "CACHES = {
    'default': {
        'BACKEND': CACHE_BACKENDS.get(CACHE_CONFIG['backend'], CACHE_CONFIG['backend']),
        'LOCATION': CACHE_CONFIG['location'],
    }
}";

/// Ordered placeholder bindings.
pub type Substitutions = Vec<(String, String)>;

/// A file rendered from a named template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Template name without the `.template` suffix.
    pub name: String,
    /// Directory the file is written to, relative to the working directory.
    pub directory: String,
    /// File name prefix (`.` for dotfiles).
    pub prefix: &'static str,
    /// Extension including the dot, or empty.
    pub extension: &'static str,
    pub substitutions: Substitutions,
}

impl TemplateFile {
    fn new(name: &str, directory: &str, extension: &'static str) -> Self {
        Self {
            name: name.to_string(),
            directory: directory.to_string(),
            prefix: "",
            extension,
            substitutions: Vec::new(),
        }
    }

    fn dotfile(name: &str, directory: &str) -> Self {
        Self { prefix: ".", ..Self::new(name, directory, "") }
    }

    fn with(mut self, key: &str, value: String) -> Self {
        self.substitutions.push((key.to_string(), value));
        self
    }

    /// Destination path relative to the working directory.
    pub fn destination(&self) -> String {
        format!("{}/{}{}{}", self.directory, self.prefix, self.name, self.extension)
    }
}

/// Replace every `$KEY` with its binding in a single left-to-right pass.
///
/// At each `$` the longest matching key wins; inserted text is never rescanned.
/// `$PROJECT_NAME` is always bound to `project_identifier`.
pub fn render(template: &str, substitutions: &[(String, String)], project_identifier: &str) -> String {
    let mut bindings: Vec<(&str, &str)> = vec![(PROJECT_NAME_KEY, project_identifier)];
    bindings.extend(
        substitutions
            .iter()
            .filter(|(key, _)| key != PROJECT_NAME_KEY)
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let matched = bindings
            .iter()
            .filter(|(key, _)| !key.is_empty() && after.starts_with(key))
            .max_by_key(|(key, _)| key.len());
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len()..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `INSTALLED_APPS` entries for every catalog library with an app registration.
pub fn installed_app_lines(state: &ProjectState) -> String {
    state
        .catalog_libraries()
        .into_iter()
        .filter_map(|lib| lib.installed_app)
        .map(|app| format!("    {},\n", app))
        .collect()
}

/// `MIDDLEWARE` entries contributed by libraries.
pub fn middleware_lines(state: &ProjectState) -> String {
    state
        .catalog_libraries()
        .into_iter()
        .filter_map(|lib| lib.middleware)
        .map(|middleware| format!("    {},\n", middleware))
        .collect()
}

/// Library-specific settings blocks, with the project name already bound.
pub fn extra_settings(state: &ProjectState) -> String {
    let identifier = state.identifier();
    state
        .catalog_libraries()
        .into_iter()
        .filter_map(|lib| lib.extra_settings)
        .map(|block| format!("{}\n\n", render(block, &[], &identifier)))
        .collect()
}

/// Lookup tables from catalog keys to Django backend paths.
fn backend_table(name: &str, entries: impl Iterator<Item = (&'static str, &'static str)>) -> String {
    let mut out = format!("{} = {{\n", name);
    for (key, backend) in entries {
        out.push_str(&format!("    '{}': '{}',\n", key, backend));
    }
    out.push_str("}\n");
    out
}

fn switch(enabled: bool, text: &str) -> String {
    if enabled { text.to_string() } else { String::new() }
}

/// Every file generated for a project, in write order.
///
/// `config_vars` is the Python text produced by secret classification.
pub fn project_files(state: &ProjectState, config_vars: &str) -> Vec<TemplateFile> {
    let app_loc = app_dir(&state.identifier());

    let mut files = vec![
        TemplateFile::new("__init__", &app_loc, ".py"),
        TemplateFile::new("asgi", &app_loc, ".py"),
        TemplateFile::new("wsgi", &app_loc, ".py"),
        TemplateFile::new("settings", &app_loc, ".py")
            .with("INSTALLED_APPS", installed_app_lines(state))
            .with("MIDDLEWARES", middleware_lines(state))
            .with("EXTRA", extra_settings(state))
            .with("CACHE", switch(state.cache.is_some(), CACHE_SETTINGS))
            .with("STATIC_SETTINGS", switch(state.flags.r#static, STATIC_FILE_SETTINGS))
            .with("MEDIA_SETTINGS", switch(state.flags.media_files, MEDIA_FILE_SETTINGS))
            .with("TEMPLATE_SETTINGS", switch(state.flags.template, TEMPLATE_SETTINGS)),
        TemplateFile::new("urls", &app_loc, ".py"),
        TemplateFile::new("config", &app_loc, ".py")
            .with("CONFIG_VARS", config_vars.to_string())
            .with(
                "DATABASE_BACKENDS",
                backend_table(
                    "DATABASE_BACKENDS",
                    DatabaseEngine::ALL.iter().map(|e| (e.key(), e.django_backend())),
                ),
            )
            .with(
                "CACHE_BACKENDS",
                backend_table(
                    "CACHE_BACKENDS",
                    CacheBackend::ALL.iter().map(|b| (b.key(), b.django_backend())),
                ),
            ),
        TemplateFile::new("manage", SOURCE_DIR, ".py"),
        TemplateFile::new("readme", SOURCE_DIR, ".md"),
        TemplateFile::dotfile("gitignore", SOURCE_DIR),
    ];

    for lib in state.catalog_libraries() {
        if let Some(name) = lib.linked_file {
            files.push(TemplateFile::new(name, &app_loc, ".py"));
        }
    }

    files
}
