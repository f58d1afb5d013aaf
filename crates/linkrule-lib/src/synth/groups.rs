use std::collections::HashMap;

use regex::Captures;

use super::transform::{Target, Transform};

/// Mutable working copy of one capture result.
///
/// Named groups are views onto their positional slot, so a transform on
/// `$name` is visible through its index as well.
#[derive(Debug, Clone)]
pub struct Groups<'n> {
    values: Vec<String>,
    names: &'n HashMap<String, usize>,
}

impl<'n> Groups<'n> {
    /// Snapshot capture groups. Groups that did not participate become empty.
    pub fn snapshot(captures: &Captures<'_>, names: &'n HashMap<String, usize>) -> Self {
        let values = (0..captures.len())
            .map(|i| captures.get(i).map_or("", |m| m.as_str()).to_string())
            .collect();
        Self { values, names }
    }

    /// Look up a placeholder token: group name first, then index.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.slot_for_name(token)
            .or_else(|| token.parse::<usize>().ok())
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }

    /// Apply a group transform in place. `None` means the transform failed
    /// and the value yields no link; an unresolvable target is a no-op.
    pub fn apply(&mut self, transform: &Transform) -> Option<()> {
        let slot = match &transform.target {
            Target::Named(name) => self.slot_for_name(name),
            Target::Positional(index) => Some(*index),
            Target::All => Some(0),
        };
        let Some(value) = slot.and_then(|i| self.values.get_mut(i)) else {
            log::debug!("transform target {:?} not present in capture", transform.target);
            return Some(());
        };
        *value = transform.apply(value)?;
        Some(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot_for_name(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }
}
