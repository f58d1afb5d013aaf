use std::fmt;

use regex::Regex;

/// Which rule field a regex came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Capture,
    Search,
    Value,
    Text,
}

impl fmt::Display for PatternRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatternRole::Capture => "capture",
            PatternRole::Search => "search",
            PatternRole::Value => "value",
            PatternRole::Text => "text",
        })
    }
}

/// A rule pattern that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid {role} pattern `{pattern}`: {message}")]
    InvalidRegex {
        role: PatternRole,
        pattern: String,
        message: String,
    },

    #[error("unknown transform command `{0}`")]
    UnknownCommand(String),
}

pub(crate) fn compile_regex(role: PatternRole, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|e| PatternError::InvalidRegex {
        role,
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
