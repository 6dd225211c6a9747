//! Flat key/value answers collected from `setup.yaml` or the question tree.

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Sigil marking a value as an environment-variable indirection.
pub const INDIRECTION_SIGIL: char = '$';

/// Top-level answers keyed by lower-cased names, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    entries: Mapping,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed mapping, lower-casing string keys.
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut entries = Mapping::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = match key {
                Value::String(s) => Value::String(s.to_lowercase()),
                other => other,
            };
            entries.insert(key, value);
        }
        Self { entries }
    }

    /// Parse a YAML document. Empty and non-mapping documents are parse errors.
    pub fn parse(content: &str, what: &str) -> Result<Self, AppError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::ParseError { what: what.into(), details: e.to_string() })?;
        match value {
            Value::Mapping(mapping) if !mapping.is_empty() => Ok(Self::from_mapping(mapping)),
            Value::Null | Value::Mapping(_) => {
                Err(AppError::ParseError { what: what.into(), details: "document is empty".into() })
            }
            _ => Err(AppError::ParseError {
                what: what.into(),
                details: "top level must be a mapping".into(),
            }),
        }
    }

    pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.entries.insert(Value::String(key.to_lowercase()), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `$NAME` string leaf with `lookup(NAME)`, or empty when unresolved.
    pub fn resolve_indirections<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (_, value) in self.entries.iter_mut() {
            resolve_value(value, lookup);
        }
    }
}

fn resolve_value<F>(value: &mut Value, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::String(s) => {
            if let Some(name) = s.strip_prefix(INDIRECTION_SIGIL) {
                *s = lookup(name).unwrap_or_default();
            }
        }
        Value::Sequence(items) => items.iter_mut().for_each(|item| resolve_value(item, lookup)),
        Value::Mapping(mapping) => {
            mapping.iter_mut().for_each(|(_, item)| resolve_value(item, lookup))
        }
        Value::Tagged(tagged) => resolve_value(&mut tagged.value, lookup),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
