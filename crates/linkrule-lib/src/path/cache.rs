use std::collections::HashMap;

use super::matcher::PathMatcher;

/// Expression text → compiled matcher.
///
/// Owned by whoever drives evaluation. Matchers are immutable and keyed by
/// their exact source text, so `clear` may run at any point; it only drops
/// work that would otherwise be reused.
#[derive(Debug, Default)]
pub struct MatcherCache {
    matchers: HashMap<String, PathMatcher>,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached matcher for `expression`, compiling it on first use.
    pub fn get_or_compile(&mut self, expression: &str) -> &PathMatcher {
        if !self.matchers.contains_key(expression) {
            log::debug!("compiling path query `{expression}`");
            self.matchers
                .insert(expression.to_string(), PathMatcher::compile(expression));
        }
        &self.matchers[expression]
    }

    pub fn clear(&mut self) {
        self.matchers.clear();
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
