use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::groups::Groups;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z0-9_]+)").expect("placeholder pattern is valid"));

/// Replace `$token` placeholders with capture groups.
///
/// `${name}` is not a placeholder here; it is left for the variable resolver.
/// Tokens naming no group stay verbatim.
pub fn substitute(template: &str, groups: &Groups<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match groups.lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
