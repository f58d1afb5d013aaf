//! Capture-group transforms.

use std::collections::HashMap;
use std::str::FromStr;

use regex::{NoExpand, Regex};

use linkrule_core::RawTransform;

use super::error::{PatternError, PatternRole, compile_regex};

/// Where a transform applies, resolved once when the link template is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A named capture group.
    Named(String),
    /// A capture group by index; 0 is the whole match.
    Positional(usize),
    /// The substituted output. Replace transforms with this target are deferred;
    /// command transforms fall back to group 0.
    All,
}

impl Target {
    /// Resolve a selector string (`$name`, `$1`, `1`, `all`, absent) against
    /// the capture pattern's group names.
    ///
    /// A name declared by the capture pattern wins over the integer reading.
    pub fn parse(raw: Option<&str>, names: &HashMap<String, usize>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Target::All;
        };
        let token = raw.strip_prefix('$').unwrap_or(raw);

        if names.contains_key(token) {
            Target::Named(token.to_string())
        } else if let Ok(index) = token.parse::<usize>() {
            Target::Positional(index)
        } else if token.is_empty() || token == "all" {
            Target::All
        } else {
            log::warn!("transform target `{raw}` names no capture group");
            Target::Named(token.to_string())
        }
    }
}

/// Named text operation from a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
    Uppercase,
    Lowercase,
    Trim,
}

impl FromStr for Command {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "encode" | "encodeURIComponent" | "percent-encode" => Ok(Command::Encode),
            "decode" | "decodeURIComponent" | "percent-decode" => Ok(Command::Decode),
            "uppercase" | "upper" | "toUpperCase" => Ok(Command::Uppercase),
            "lowercase" | "lower" | "toLowerCase" => Ok(Command::Lowercase),
            "trim" => Ok(Command::Trim),
            _ => Err(PatternError::UnknownCommand(name.to_string())),
        }
    }
}

impl Command {
    /// `None` when percent-decoding yields invalid UTF-8.
    pub fn apply(self, text: &str) -> Option<String> {
        match self {
            Command::Encode => Some(urlencoding::encode(text).into_owned()),
            Command::Decode => urlencoding::decode(text).ok().map(|s| s.into_owned()),
            Command::Uppercase => Some(text.to_uppercase()),
            Command::Lowercase => Some(text.to_lowercase()),
            Command::Trim => Some(text.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Replace every non-overlapping match with literal text.
    Replace { search: Regex, replace: String },
    Command(Command),
}

#[derive(Debug, Clone)]
pub struct Transform {
    pub action: Action,
    pub target: Target,
}

impl Transform {
    pub fn compile(raw: &RawTransform, names: &HashMap<String, usize>) -> Result<Self, PatternError> {
        let action = match raw {
            RawTransform::Replace {
                search, replace, ..
            } => Action::Replace {
                search: compile_regex(PatternRole::Search, search)?,
                replace: replace.clone(),
            },
            RawTransform::Command { command, .. } => Action::Command(command.parse()?),
        };
        Ok(Self {
            action,
            target: Target::parse(raw.target(), names),
        })
    }

    /// Runs after template substitution instead of on a group.
    pub fn is_deferred(&self) -> bool {
        matches!(
            (&self.action, &self.target),
            (Action::Replace { .. }, Target::All)
        )
    }

    /// Apply to one string. `None` only when a decode fails.
    pub fn apply(&self, text: &str) -> Option<String> {
        match &self.action {
            Action::Replace { search, replace } => Some(
                search
                    .replace_all(text, NoExpand(replace.as_str()))
                    .into_owned(),
            ),
            Action::Command(command) => command.apply(text),
        }
    }
}
