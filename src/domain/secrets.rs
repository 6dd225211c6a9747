//! Partitioning of sensitive sections into environment-backed secrets.
//!
//! Every leaf under `database`, `cache` and `env` is moved out of the setup
//! document into the secret file and replaced with a `$NAME` placeholder.
//! Placeholders are derived from key names only, so classifying an already
//! redacted document yields the same document again.

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::project_state::ProjectState;

/// A category of sensitive configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    Database,
    Cache,
    Env,
}

impl Classifier {
    /// Processing order; the embedded block layout depends on it.
    pub const ORDER: [Classifier; 3] = [Classifier::Database, Classifier::Cache, Classifier::Env];

    /// Section key in the setup document.
    pub fn key(&self) -> &'static str {
        match self {
            Classifier::Database => "database",
            Classifier::Cache => "cache",
            Classifier::Env => "env",
        }
    }

    /// `env` entries keep their own names; the others are prefixed and grouped.
    pub fn is_grouped(&self) -> bool {
        !matches!(self, Classifier::Env)
    }

    /// Environment variable name for a key of this section.
    pub fn variable_name(&self, key: &str) -> String {
        if self.is_grouped() {
            format!("{}_{}", self.key().to_uppercase(), key.to_uppercase())
        } else {
            key.to_uppercase()
        }
    }

    /// Name of the generated Python dict holding this section.
    pub fn block_name(&self) -> String {
        format!("{}_CONFIG", self.key().to_uppercase())
    }
}

/// One `NAME=value` line of the secret file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    pub name: String,
    pub value: String,
}

/// One generated Python assignment reading a secret back from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedLine {
    pub classifier: Classifier,
    pub key: String,
    pub text: String,
    /// Last entry of a grouped classifier; the dict is closed after it.
    pub closes_block: bool,
}

/// Redacted document plus the secrets removed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub document: Mapping,
    pub secrets: Vec<SecretEntry>,
    pub embedded: Vec<EmbeddedLine>,
}

/// Classify the secrets of a project state.
pub fn classify(state: &ProjectState) -> Classification {
    classify_document(state.to_document())
}

/// Classify a setup document; the input mapping is consumed, the source state is untouched.
pub fn classify_document(mut document: Mapping) -> Classification {
    let mut secrets = Vec::new();
    let mut embedded = Vec::new();

    for classifier in Classifier::ORDER {
        let Some(Value::Mapping(section)) = document.get_mut(classifier.key()) else {
            continue;
        };
        let count = section.len();
        for (index, (key, value)) in section.iter_mut().enumerate() {
            let key = leaf_text(key);
            let name = classifier.variable_name(&key);

            secrets.push(SecretEntry { name: name.clone(), value: leaf_text(value) });
            *value = Value::String(format!("${}", name));

            let text = if classifier.is_grouped() {
                format!("'{}' : os.environ.get('{}', ''),", key, name)
            } else {
                format!("{} = os.environ.get('{}', '')", name, name)
            };
            embedded.push(EmbeddedLine {
                classifier,
                key,
                text,
                closes_block: classifier.is_grouped() && index + 1 == count,
            });
        }
    }

    Classification { document, secrets, embedded }
}

impl Classification {
    /// Redacted `setup.yaml` content.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.document).map_err(|e| AppError::ParseError {
            what: "redacted setup document".into(),
            details: e.to_string(),
        })
    }

    /// `.env` content: one unquoted `NAME=value` per line.
    pub fn secret_file(&self) -> String {
        self.secrets.iter().map(|entry| format!("{}={}\n", entry.name, entry.value)).collect()
    }

    /// Python source spliced into `config.py`.
    pub fn config_vars(&self) -> String {
        let mut out = String::new();
        let mut open: Option<Classifier> = None;
        for line in &self.embedded {
            if line.classifier.is_grouped() {
                if open != Some(line.classifier) {
                    out.push_str(&format!("{} = {{\n", line.classifier.block_name()));
                    open = Some(line.classifier);
                }
                out.push_str("    ");
                out.push_str(&line.text);
                out.push('\n');
                if line.closes_block {
                    out.push_str("}\n");
                    open = None;
                }
            } else {
                out.push_str(&line.text);
                out.push('\n');
            }
        }
        out
    }
}

/// Read a secret file back into `NAME -> value`.
///
/// Values are taken literally up to the end of the line: no quote stripping
/// and no `$` expansion, so anything `secret_file` wrote comes back unchanged.
pub fn parse_secret_file(content: &str) -> IndexMap<String, String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other)
            .unwrap_or_else(|_| serde_yaml::to_string(other).unwrap_or_default().trim().to_string()),
    }
}
