//! Link synthesizer.
//!
//! Turns a matched string into a finished `(target, tooltip)` pair:
//!
//! 1. apply the capture pattern (default: the whole input as groups 0 and 1)
//! 2. snapshot the groups into a mutable working copy
//! 3. run group transforms in declaration order
//! 4. substitute `$name` / `$N` placeholders into the target and tooltip templates
//! 5. run deferred `all` transforms over both substituted strings

mod error;
mod groups;
mod template;
mod transform;


use std::collections::HashMap;

use regex::Regex;

use linkrule_core::RawLink;

pub use error::{PatternError, PatternRole};
pub(crate) use error::compile_regex;
pub use groups::Groups;
pub use template::substitute;
pub use transform::{Action, Command, Target, Transform};

/// Capture applied when a rule declares none.
pub const DEFAULT_CAPTURE: &str = r"(?s)^(.*)$";

/// Compiled link template of one rule.
#[derive(Debug, Clone)]
pub struct LinkSpec {
    capture: Regex,
    names: HashMap<String, usize>,
    target: String,
    tooltip: Option<String>,
    transforms: Vec<Transform>,
}

/// Finished link, before variable resolution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkResult {
    pub target: String,
    pub tooltip: String,
}

impl LinkSpec {
    /// Compile patterns and parse transform targets once.
    pub fn compile(raw: &RawLink) -> Result<Self, PatternError> {
        let capture = compile_regex(
            PatternRole::Capture,
            raw.capture.as_deref().unwrap_or(DEFAULT_CAPTURE),
        )?;
        let names: HashMap<String, usize> = capture
            .capture_names()
            .enumerate()
            .filter_map(|(i, name)| name.map(|n| (n.to_string(), i)))
            .collect();
        let transforms = raw
            .transforms
            .iter()
            .map(|t| Transform::compile(t, &names))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            capture,
            names,
            target: raw.link.clone(),
            tooltip: raw.tooltip.clone(),
            transforms,
        })
    }

    /// Shorthand for a template with a capture and target only.
    pub fn new(capture: Option<&str>, target: &str) -> Result<Self, PatternError> {
        Self::compile(&RawLink {
            capture: capture.map(str::to_string),
            link: target.to_string(),
            ..RawLink::default()
        })
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn synthesize(&self, value: &str) -> Option<LinkResult> {
        synthesize(value, self)
    }
}

/// Build a link from `value`, or `None` if the capture does not match.
pub fn synthesize(value: &str, spec: &LinkSpec) -> Option<LinkResult> {
    let Some(captures) = spec.capture.captures(value) else {
        log::debug!("capture `{}` does not match `{value}`", spec.capture.as_str());
        return None;
    };

    let mut groups = Groups::snapshot(&captures, &spec.names);
    for transform in spec.transforms.iter().filter(|t| !t.is_deferred()) {
        if groups.apply(transform).is_none() {
            log::debug!("transform on `{value}` failed, no link");
            return None;
        }
    }

    let mut target = substitute(&spec.target, &groups);
    let mut tooltip = spec.tooltip.as_deref().map(|t| substitute(t, &groups));

    for transform in spec.transforms.iter().filter(|t| t.is_deferred()) {
        target = transform.apply(&target)?;
        tooltip = match tooltip {
            Some(text) => Some(transform.apply(&text)?),
            None => None,
        };
    }

    let tooltip = tooltip.unwrap_or_else(|| target.clone());
    Some(LinkResult { target, tooltip })
}
