//! Rule evaluation over documents.
//!
//! [`LinkEngine`] owns a compiled [`RuleSet`] and the path matcher cache.
//! Structural rules are evaluated per node (breadcrumb + scalar value),
//! text rules per regex match over raw document text.

mod error;
mod rule;

#[cfg(test)]
mod rule_tests;

use std::ops::Range;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use linkrule_core::{Breadcrumb, Variables};

use crate::path::MatcherCache;
use crate::synth::LinkResult;

pub use error::RuleError;
pub use rule::{Rule, RuleSet};

/// Link produced for a structural node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLink {
    pub breadcrumb: Breadcrumb,
    pub value: String,
    pub link: LinkResult,
}

/// Link produced for a text match, with its byte range in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLink {
    pub range: Range<usize>,
    pub link: LinkResult,
}

#[derive(Debug, Default)]
pub struct LinkEngine {
    rules: RuleSet,
    cache: MatcherCache,
}

impl LinkEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            cache: MatcherCache::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn cache(&self) -> &MatcherCache {
        &self.cache
    }

    /// Swap in a new rule set and drop every cached matcher.
    pub fn reconfigure(&mut self, rules: RuleSet) {
        log::debug!("reconfigured with {} rules", rules.len());
        self.rules = rules;
        self.cache.clear();
    }

    /// Links for one structural node. Each rule contributes at most one link.
    pub fn node_links(
        &mut self,
        file: &Path,
        breadcrumb: &Breadcrumb,
        value: &str,
        variables: &Variables,
    ) -> Vec<LinkResult> {
        let Self { rules, cache } = self;
        log::trace!("node {breadcrumb} = `{value}`");

        rules
            .iter()
            .filter(|rule| !rule.paths().is_empty() && rule.applies_to(file))
            .filter(|rule| {
                rule.paths()
                    .iter()
                    .any(|path| cache.get_or_compile(path).matches(breadcrumb))
            })
            .filter_map(|rule| rule.link(value, variables))
            .collect()
    }

    /// Links for every regex match of the text rules, ordered by position.
    pub fn text_links(&self, file: &Path, text: &str, variables: &Variables) -> Vec<TextLink> {
        let mut links = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.applies_to(file)) {
            for pattern in rule.patterns() {
                for found in pattern.find_iter(text).filter(|m| !m.is_empty()) {
                    if let Some(link) = rule.link(found.as_str(), variables) {
                        links.push(TextLink {
                            range: found.range(),
                            link,
                        });
                    }
                }
            }
        }

        links.sort_by_key(|link| link.range.start);
        links
    }

    /// Walk a JSON document and collect links for every scalar node.
    ///
    /// Object members are addressed by key, array elements by index.
    /// Strings, numbers and booleans are values; `null` is skipped.
    pub fn document_links(
        &mut self,
        file: &Path,
        document: &Value,
        variables: &Variables,
    ) -> Vec<NodeLink> {
        let mut links = Vec::new();
        let structural = self
            .rules
            .iter()
            .any(|rule| !rule.paths().is_empty() && rule.applies_to(file));
        if structural {
            self.walk(file, document, Breadcrumb::root(), variables, &mut links);
        }
        links
    }

    fn walk(
        &mut self,
        file: &Path,
        node: &Value,
        breadcrumb: Breadcrumb,
        variables: &Variables,
        out: &mut Vec<NodeLink>,
    ) {
        let value = match node {
            Value::Object(members) => {
                for (key, child) in members {
                    self.walk(file, child, breadcrumb.child(key.as_str()), variables, out);
                }
                return;
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.walk(file, child, breadcrumb.index(index), variables, out);
                }
                return;
            }
            Value::Null => return,
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
        };

        for link in self.node_links(file, &breadcrumb, &value, variables) {
            out.push(NodeLink {
                breadcrumb: breadcrumb.clone(),
                value: value.clone(),
                link,
            });
        }
    }
}
