use std::path::Path;

use globset::{Glob, GlobMatcher};
use regex::Regex;

use linkrule_core::{RawRule, RawRuleSet, Variables};

use super::error::RuleError;
use crate::diagnostics::Diagnostics;
use crate::path::PathQuery;
use crate::resolve::resolve;
use crate::synth::{LinkResult, LinkSpec, PatternError, PatternRole, compile_regex};

/// A compiled rule: where it applies, what it selects, how it builds links.
#[derive(Debug, Clone)]
pub struct Rule {
    index: usize,
    files: Option<GlobMatcher>,
    paths: Vec<String>,
    patterns: Vec<Regex>,
    value_pattern: Option<Regex>,
    link: LinkSpec,
}

impl Rule {
    /// Compile every pattern of `raw`. Path queries are kept as text and
    /// compiled lazily through the engine's cache.
    pub fn compile(index: usize, raw: &RawRule) -> Result<Self, RuleError> {
        let pattern_err = |source: PatternError| RuleError::Pattern {
            rule: index,
            source,
        };

        let files = raw
            .files
            .as_deref()
            .map(|glob| {
                Glob::new(glob)
                    .map(|g| g.compile_matcher())
                    .map_err(|source| RuleError::Glob {
                        rule: index,
                        glob: glob.to_string(),
                        source,
                    })
            })
            .transpose()?;

        let patterns = raw
            .patterns
            .as_slice()
            .iter()
            .map(|p| compile_regex(PatternRole::Text, p))
            .collect::<Result<Vec<_>, _>>()
            .map_err(pattern_err)?;

        let value_pattern = raw
            .value_pattern
            .as_deref()
            .map(|p| compile_regex(PatternRole::Value, p))
            .transpose()
            .map_err(pattern_err)?;

        let link = LinkSpec::compile(&raw.link).map_err(pattern_err)?;

        Ok(Self {
            index,
            files,
            paths: raw.paths.as_slice().to_vec(),
            patterns,
            value_pattern,
            link,
        })
    }

    /// Position of the rule in its rule file.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn link_spec(&self) -> &LinkSpec {
        &self.link
    }

    /// Rules without a file glob apply everywhere.
    pub fn applies_to(&self, file: &Path) -> bool {
        self.files.as_ref().is_none_or(|glob| glob.is_match(file))
    }

    pub fn accepts_value(&self, value: &str) -> bool {
        self.value_pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(value))
    }

    /// Synthesize and resolve the link for one matched value.
    pub fn link(&self, value: &str, variables: &Variables) -> Option<LinkResult> {
        if !self.accepts_value(value) {
            log::trace!("rule {}: value `{value}` rejected", self.index);
            return None;
        }
        let LinkResult { target, tooltip } = self.link.synthesize(value)?;
        Some(LinkResult {
            target: resolve(&target, variables),
            tooltip: resolve(&tooltip, variables),
        })
    }
}

/// Ordered list of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile all rules, dropping the ones that fail.
    ///
    /// Returned errors cover dropped rules and invalid path queries of kept
    /// rules (see [`RuleError::is_fatal`]).
    pub fn compile(raw: &RawRuleSet) -> (Self, Vec<RuleError>) {
        let mut rules = Vec::with_capacity(raw.rules.len());
        let mut errors = Vec::new();

        for (index, raw_rule) in raw.rules.iter().enumerate() {
            let rule = match Rule::compile(index, raw_rule) {
                Ok(rule) => rule,
                Err(err) => {
                    log::warn!("{err}");
                    errors.push(err);
                    continue;
                }
            };

            for (path_index, expression) in rule.paths.iter().enumerate() {
                if let Err(source) = PathQuery::parse(expression) {
                    errors.push(RuleError::Query {
                        rule: index,
                        index: path_index,
                        expression: expression.clone(),
                        source,
                    });
                }
            }
            if rule.paths.is_empty() && rule.patterns.is_empty() {
                log::warn!("rule {index} has neither paths nor patterns and never fires");
            }
            rules.push(rule);
        }

        (Self { rules }, errors)
    }

    /// Compile and collect problems as diagnostics.
    pub fn compile_with_diagnostics(raw: &RawRuleSet) -> (Self, Diagnostics) {
        let (rules, errors) = Self::compile(raw);
        let diagnostics = errors.iter().map(RuleError::to_diagnostic).collect();
        (rules, diagnostics)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
