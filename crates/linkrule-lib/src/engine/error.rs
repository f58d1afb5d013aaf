use crate::diagnostics::{Diagnostic, Severity};
use crate::path::QueryError;
use crate::synth::{PatternError, PatternRole};

/// A problem with one rule of a rule set.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule {rule}: invalid file glob `{glob}`: {source}")]
    Glob {
        rule: usize,
        glob: String,
        #[source]
        source: globset::Error,
    },

    #[error("rule {rule}: {source}")]
    Pattern {
        rule: usize,
        #[source]
        source: PatternError,
    },

    /// The rule is kept; the query never matches.
    #[error("rule {rule}: path query `{expression}`: {source}")]
    Query {
        rule: usize,
        index: usize,
        expression: String,
        #[source]
        source: QueryError,
    },
}

impl RuleError {
    pub fn rule(&self) -> usize {
        match self {
            RuleError::Glob { rule, .. }
            | RuleError::Pattern { rule, .. }
            | RuleError::Query { rule, .. } => *rule,
        }
    }

    /// Whether the rule was dropped from the set.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RuleError::Query { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let rule = self.rule();
        let severity = if self.is_fatal() {
            Severity::Error
        } else {
            Severity::Warning
        };

        let (message, field, source) = match self {
            RuleError::Glob { glob, source, .. } => (
                source.kind().to_string(),
                "files".to_string(),
                Some((glob.clone(), 0..glob.len())),
            ),
            RuleError::Pattern { source, .. } => match source {
                PatternError::InvalidRegex {
                    role,
                    pattern,
                    message,
                } => (
                    regex_summary(message).to_string(),
                    pattern_field(*role).to_string(),
                    Some((pattern.clone(), 0..pattern.len())),
                ),
                PatternError::UnknownCommand(_) => {
                    (source.to_string(), "transforms".to_string(), None)
                }
            },
            RuleError::Query {
                index,
                expression,
                source,
                ..
            } => (
                source.to_string(),
                format!("paths[{index}]"),
                Some((expression.clone(), source.span())),
            ),
        };

        Diagnostic {
            severity,
            message,
            origin: Some(format!("rules[{rule}].{field}")),
            source,
        }
    }
}

fn pattern_field(role: PatternRole) -> &'static str {
    match role {
        PatternRole::Capture => "capture",
        PatternRole::Search => "transforms",
        PatternRole::Value => "valuePattern",
        PatternRole::Text => "patterns",
    }
}

/// regex parse errors carry their own snippet; keep the trailing `error:` line.
fn regex_summary(message: &str) -> &str {
    message
        .lines()
        .rev()
        .find(|line| line.starts_with("error:"))
        .map(|line| line.trim_start_matches("error:").trim())
        .unwrap_or_else(|| message.lines().next().unwrap_or(message))
}
