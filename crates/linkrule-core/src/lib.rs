#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the linkrule crates.
//!
//! Three layers:
//! - **Breadcrumbs**: the location of a node inside a structured document
//! - **Configuration layer**: 1:1 mapping to the JSON rule file (`config`)
//! - **Variables**: per-document `${name}` values handed to the resolver (`variables`)

use std::fmt;

pub mod config;
pub mod variables;

pub use config::{ConfigError, OneOrMany, RawLink, RawRule, RawRuleSet, RawTransform};
pub use variables::Variables;

// ============================================================================
// Breadcrumb
// ============================================================================

/// Ordered tokens from the document root down to a node.
///
/// Object members contribute their key, array elements their decimal index.
/// The root itself is the empty breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Breadcrumb {
    tokens: Vec<String>,
}

impl Breadcrumb {
    pub fn root() -> Self {
        Self::default()
    }

    /// Breadcrumb of an object member below this one.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend(self.tokens.iter().cloned());
        tokens.push(key.into());
        Self { tokens }
    }

    /// Breadcrumb of an array element below this one.
    pub fn index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Breadcrumb {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for Breadcrumb {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// Renders the breadcrumb as a normalized path: `$.store.book[0]['first name']`.
///
/// All-digit tokens render as indices, identifier-like tokens in dot notation,
/// everything else as a single-quoted bracket key.
impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for token in &self.tokens {
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                write!(f, "[{token}]")?;
            } else if is_plain_identifier(token) {
                write!(f, ".{token}")?;
            } else {
                f.write_str("['")?;
                for c in token.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("']")?;
            }
        }
        Ok(())
    }
}

fn is_plain_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}
