//! Normalized project state built once per invocation.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::AppError;
use crate::domain::catalog::{Library, canonical_library, find_library};
use crate::domain::raw_config::RawConfig;
use crate::domain::secret_key::{SECRET_KEY_ENV, generate_secret};
use crate::domain::sections::{CacheConfig, DatabaseConfig};

pub const DEFAULT_PROJECT_NAME: &str = "Django Project";

/// Boolean switches that shape the generated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFlags {
    pub requirements: bool,
    pub template: bool,
    pub r#static: bool,
    pub media_files: bool,
}

impl Default for ProjectFlags {
    fn default() -> Self {
        Self { requirements: false, template: true, r#static: true, media_files: true }
    }
}

/// Aggregate root consumed read-only by the classifier, generator and orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectState {
    pub name: String,
    pub libraries: BTreeSet<String>,
    pub required: BTreeSet<String>,
    pub database: DatabaseConfig,
    pub cache: Option<CacheConfig>,
    pub env: IndexMap<String, String>,
    pub flags: ProjectFlags,
}

impl ProjectState {
    /// Normalize answers, resolving `$NAME` indirections through `lookup`.
    pub fn normalize_with<F>(mut raw: RawConfig, lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        raw.resolve_indirections(lookup);

        // `required` is derived, never taken from input.
        raw.remove("required");

        let database = match raw.remove("database") {
            Some(value) if !value.is_null() => DatabaseConfig::from_value(value)?,
            _ => DatabaseConfig::default(),
        };
        let cache = match raw.remove("cache") {
            Some(value) if !value.is_null() => Some(CacheConfig::from_value(value)?),
            _ => None,
        };

        let name = raw
            .get("name")
            .and_then(scalar_text)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        let libraries = library_set(raw.get("libraries"))?;
        let required = required_libraries(&libraries, &database);
        let env = env_entries(raw.get("env"))?;

        let defaults = ProjectFlags::default();
        let flags = ProjectFlags {
            requirements: flag(&raw, &["requirements"], defaults.requirements),
            template: flag(&raw, &["template"], defaults.template),
            r#static: flag(&raw, &["static"], defaults.r#static),
            media_files: flag(&raw, &["media_files", "media"], defaults.media_files),
        };

        debug!(
            project = %name,
            libraries = libraries.len(),
            required = required.len(),
            engine = database.engine.key(),
            cache = cache.is_some(),
            "normalized project state"
        );

        Ok(Self { name, libraries, required, database, cache, env, flags })
    }

    /// Name usable as a directory and Python module.
    ///
    /// Always a single path component under `src/`.
    pub fn identifier(&self) -> String {
        self.name.split_whitespace().collect::<Vec<_>>().join("_").replace(['/', '\\', '.'], "_")
    }

    /// Every package to install: requested libraries plus derived companions.
    pub fn all_libraries(&self) -> BTreeSet<&str> {
        self.libraries.iter().chain(self.required.iter()).map(String::as_str).collect()
    }

    /// Catalog entries for every installable package.
    pub fn catalog_libraries(&self) -> Vec<&'static Library> {
        self.all_libraries().into_iter().filter_map(find_library).collect()
    }

    /// Full document with real values, in `setup.yaml` key order.
    pub fn to_document(&self) -> Mapping {
        let mut doc = Mapping::new();
        doc.insert("name".into(), self.name.as_str().into());
        if !self.libraries.is_empty() {
            doc.insert("libraries".into(), string_sequence(&self.libraries));
        }
        if !self.required.is_empty() {
            doc.insert("required".into(), string_sequence(&self.required));
        }
        doc.insert("database".into(), Value::Mapping(self.database.to_mapping()));
        if let Some(cache) = &self.cache {
            doc.insert("cache".into(), Value::Mapping(cache.to_mapping()));
        }
        let env: Mapping =
            self.env.iter().map(|(k, v)| (Value::from(k.as_str()), Value::from(v.as_str()))).collect();
        doc.insert("env".into(), Value::Mapping(env));
        doc.insert("requirements".into(), self.flags.requirements.into());
        doc.insert("template".into(), self.flags.template.into());
        doc.insert("static".into(), self.flags.r#static.into());
        doc.insert("media_files".into(), self.flags.media_files.into());
        doc
    }
}

fn required_libraries(libraries: &BTreeSet<String>, database: &DatabaseConfig) -> BTreeSet<String> {
    let mut required: BTreeSet<String> = libraries
        .iter()
        .filter_map(|lib| find_library(lib).and_then(|entry| entry.linked))
        .map(str::to_string)
        .collect();
    if !database.is_default()
        && let Some(driver) = database.engine.driver_package()
    {
        required.insert(driver.to_string());
    }
    required
}

fn library_set(value: Option<&Value>) -> Result<BTreeSet<String>, AppError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(BTreeSet::new()),
        Some(Value::Sequence(items)) => items.iter().collect::<Vec<_>>(),
        Some(single @ Value::String(_)) => vec![single],
        Some(_) => {
            return Err(AppError::invalid_config("libraries", "expected a list of library names"));
        }
    };
    let mut libraries = BTreeSet::new();
    for item in items {
        let text = scalar_text(item).ok_or_else(|| {
            AppError::invalid_config("libraries", format!("expected a library name, found {:?}", item))
        })?;
        if !text.trim().is_empty() {
            libraries.insert(canonical_library(&text));
        }
    }
    Ok(libraries)
}

fn env_entries(value: Option<&Value>) -> Result<IndexMap<String, String>, AppError> {
    let mut env = IndexMap::new();
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Mapping(mapping)) => {
            for (key, value) in mapping {
                let key = scalar_text(key)
                    .ok_or_else(|| AppError::invalid_config("env", "keys must be scalars"))?;
                let value = scalar_text(value).ok_or_else(|| {
                    AppError::invalid_config("env", format!("value of `{}` must be a scalar", key))
                })?;
                env.insert(key, value);
            }
        }
        Some(_) => return Err(AppError::invalid_config("env", "expected a mapping")),
    }
    if env.get(SECRET_KEY_ENV).is_none_or(|key| key.is_empty()) {
        env.insert(SECRET_KEY_ENV.to_string(), generate_secret());
    }
    Ok(env)
}

fn flag(raw: &RawConfig, keys: &[&str], default: bool) -> bool {
    keys.iter()
        .find_map(|key| match raw.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::String(s)) => match s.to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Some(true),
                "false" | "no" | "n" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        })
        .unwrap_or(default)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_sequence(items: &BTreeSet<String>) -> Value {
    Value::Sequence(items.iter().map(|s| Value::from(s.as_str())).collect())
}
