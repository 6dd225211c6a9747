//! Strictly validated `database` and `cache` sections of the setup document.

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::catalog::{CacheBackend, DatabaseEngine};

pub const DEFAULT_DATABASE_NAME: &str = "db.sqlite3";

/// Database connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub engine: DatabaseEngine,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub option: Option<Mapping>,
}

impl Default for DatabaseConfig {
    /// Local file database used when no `database` section is given.
    fn default() -> Self {
        Self {
            engine: DatabaseEngine::Sqlite3,
            name: DEFAULT_DATABASE_NAME.to_string(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: String::new(),
            option: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabaseFields {
    #[serde(deserialize_with = "scalar_string")]
    engine: String,
    #[serde(default, deserialize_with = "scalar_string")]
    name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    user: String,
    #[serde(default, deserialize_with = "scalar_string")]
    password: String,
    #[serde(default, deserialize_with = "scalar_string")]
    host: String,
    #[serde(default, deserialize_with = "scalar_string")]
    port: String,
    #[serde(default, alias = "options", deserialize_with = "option_mapping")]
    option: Option<Mapping>,
}

impl DatabaseConfig {
    pub const SECTION: &'static str = "database";

    /// Construct from a raw `database` value, rejecting unknown fields and engines.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let fields: DatabaseFields = strict_section(Self::SECTION, value)?;
        let engine = DatabaseEngine::from_key(&fields.engine).ok_or_else(|| {
            AppError::invalid_config(
                Self::SECTION,
                format!("unknown engine `{}`, expected one of {}", fields.engine, engine_keys()),
            )
        })?;

        Ok(Self {
            engine,
            name: fields.name,
            user: fields.user,
            password: fields.password,
            host: fields.host,
            port: fields.port,
            option: fields.option.filter(|option| !option.is_empty()),
        })
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Section as written to `setup.yaml`, in field order.
    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("engine".into(), self.engine.key().into());
        mapping.insert("name".into(), self.name.as_str().into());
        mapping.insert("user".into(), self.user.as_str().into());
        mapping.insert("password".into(), self.password.as_str().into());
        mapping.insert("host".into(), self.host.as_str().into());
        mapping.insert("port".into(), self.port.as_str().into());
        if let Some(option) = &self.option {
            mapping.insert("option".into(), Value::Mapping(option.clone()));
        }
        mapping
    }
}

/// Cache settings. Absent means caching is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub location: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CacheFields {
    #[serde(deserialize_with = "scalar_string")]
    backend: String,
    #[serde(default, deserialize_with = "scalar_string")]
    location: String,
}

impl CacheConfig {
    pub const SECTION: &'static str = "cache";

    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let fields: CacheFields = strict_section(Self::SECTION, value)?;
        let backend = CacheBackend::from_key(&fields.backend).ok_or_else(|| {
            AppError::invalid_config(
                Self::SECTION,
                format!("unknown backend `{}`, expected one of {}", fields.backend, backend_keys()),
            )
        })?;
        Ok(Self { backend, location: fields.location })
    }

    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("backend".into(), self.backend.key().into());
        mapping.insert("location".into(), self.location.as_str().into());
        mapping
    }
}

fn strict_section<T: serde::de::DeserializeOwned>(section: &str, value: Value) -> Result<T, AppError> {
    let Value::Mapping(mapping) = value else {
        return Err(AppError::invalid_config(section, "expected a mapping of fields"));
    };
    let lowered: Mapping = mapping
        .into_iter()
        .map(|(key, value)| match key {
            Value::String(s) => (Value::String(s.to_lowercase()), value),
            other => (other, value),
        })
        .collect();
    serde_yaml::from_value(Value::Mapping(lowered))
        .map_err(|e| AppError::invalid_config(section, e.to_string()))
}

/// Accept any YAML scalar and keep its textual form.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected a scalar value, found {:?}", other))),
    }
}

/// `option` is a mapping, or its serialized form read back from the secret file.
fn option_mapping<'de, D>(deserializer: D) -> Result<Option<Mapping>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(mapping)),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => match serde_yaml::from_str::<Value>(&s) {
            Ok(Value::Mapping(mapping)) => Ok(Some(mapping)),
            _ => Err(serde::de::Error::custom(format!("option `{}` is not a mapping", s))),
        },
        other => Err(serde::de::Error::custom(format!("expected an option mapping, found {:?}", other))),
    }
}

fn engine_keys() -> String {
    DatabaseEngine::ALL.iter().map(|e| e.key()).collect::<Vec<_>>().join(", ")
}

fn backend_keys() -> String {
    CacheBackend::ALL.iter().map(|b| b.key()).collect::<Vec<_>>().join(", ")
}
