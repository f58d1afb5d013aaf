//! Rule file deserialization layer.
//!
//! Maps the JSON rule file 1:1 onto plain structs. Nothing here compiles
//! patterns or validates selectors; that happens when a rule set is built
//! from these raw values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while loading a rule file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A field that accepts either a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Top-level rule file content.
#[derive(Debug, Clone, Default)]
pub struct RawRuleSet {
    pub rules: Vec<RawRule>,
}

/// Either `{ "rules": [...] }` or a bare `[...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleFile {
    Wrapped { rules: Vec<RawRule> },
    Bare(Vec<RawRule>),
}

impl RawRuleSet {
    /// Parse rule file content.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules = match serde_json::from_str(json)? {
            RawRuleFile::Wrapped { rules } => rules,
            RawRuleFile::Bare(rules) => rules,
        };
        Ok(Self { rules })
    }

    /// Read and parse a rule file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// One user-declared rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRule {
    /// File glob restricting which documents the rule applies to.
    #[serde(default)]
    pub files: Option<String>,
    /// Path queries selecting structural nodes.
    #[serde(default)]
    pub paths: OneOrMany<String>,
    /// Regexes selecting raw text spans.
    #[serde(default)]
    pub patterns: OneOrMany<String>,
    /// Node values must match this regex for the rule to fire.
    #[serde(default)]
    pub value_pattern: Option<String>,
    #[serde(flatten)]
    pub link: RawLink,
}

/// Link template portion of a rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub capture: Option<String>,
    pub link: String,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub transforms: Vec<RawTransform>,
}

/// A transform as written in the rule file.
///
/// `target` is a selector string: `$name`, `$1`, `all`, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTransform {
    Replace {
        search: String,
        #[serde(default)]
        replace: String,
        #[serde(default)]
        target: Option<String>,
    },
    Command {
        command: String,
        #[serde(default)]
        target: Option<String>,
    },
}

impl RawTransform {
    pub fn target(&self) -> Option<&str> {
        match self {
            RawTransform::Replace { target, .. } | RawTransform::Command { target, .. } => {
                target.as_deref()
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
