/// Declarative setup document read and written in the working directory.
pub const SETUP_CONFIG_FILE: &str = "setup.yaml";

/// Generated secret file, one `KEY=VALUE` per line.
pub const SECRET_FILE: &str = ".env";

/// Environment file loaded before every command unless `--env` says otherwise.
pub const DEFAULT_ENV_FILE: &str = "cli.env";

/// Frozen dependency manifest.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Root of the generated Django sources.
pub const SOURCE_DIR: &str = "src";

/// `src/static`
pub fn static_dir() -> String {
    format!("{}/static", SOURCE_DIR)
}

/// `src/media`
pub fn media_dir() -> String {
    format!("{}/media", SOURCE_DIR)
}

/// `src/template`
pub fn template_dir() -> String {
    format!("{}/template", SOURCE_DIR)
}

/// `src/<identifier>`, the Django project package.
pub fn app_dir(identifier: &str) -> String {
    format!("{}/{}", SOURCE_DIR, identifier)
}
