//! `setup.yaml` loading from the working directory.

use tracing::{debug, warn};

use crate::domain::RawConfig;
use crate::domain::project_paths::SETUP_CONFIG_FILE;
use crate::ports::{ProjectFilesystem, Reporter};

const FILE_NOT_FOUND_MSG: &str = "Cannot find the setup yaml file, falling back to questions";
const PARSE_ERROR_MSG: &str =
    "Bad YAML config file, unable to parse. Make sure the YAML file is correct";

/// Load the setup document.
///
/// A missing, unreadable, empty or malformed document is reported and
/// treated as "no config", which sends the caller to the question tree.
pub fn load_setup_config(store: &impl ProjectFilesystem, reporter: &impl Reporter) -> RawConfig {
    if !store.file_exists(SETUP_CONFIG_FILE) {
        reporter.warn(FILE_NOT_FOUND_MSG);
        return RawConfig::new();
    }

    let content = match store.read_file(SETUP_CONFIG_FILE) {
        Ok(content) => content,
        Err(err) => {
            warn!(error = %err, "failed to read {}", SETUP_CONFIG_FILE);
            reporter.warn(FILE_NOT_FOUND_MSG);
            return RawConfig::new();
        }
    };

    match RawConfig::parse(&content, SETUP_CONFIG_FILE) {
        Ok(config) => {
            debug!("loaded {}", SETUP_CONFIG_FILE);
            config
        }
        Err(err) => {
            warn!(error = %err, "ignoring {}", SETUP_CONFIG_FILE);
            reporter.warn(PARSE_ERROR_MSG);
            RawConfig::new()
        }
    }
}
