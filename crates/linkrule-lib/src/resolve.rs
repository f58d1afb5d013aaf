//! Variable resolver.
//!
//! Expands `${name}` placeholders in a finished link, then normalizes the
//! whole string once if it looks like a URI.

use linkrule_core::Variables;

const FILE_SCHEME: &str = "file://";

/// Expand variables and normalize separators.
///
/// Substitution is a single left-to-right scan: inserted values are never
/// rescanned, so a value containing `$` or `${other}` is kept as is.
/// Unknown variables stay verbatim.
pub fn resolve(template: &str, variables: &Variables) -> String {
    let expanded = expand(template, variables);
    let mut out = if is_uri_shaped(&expanded) {
        expanded.replace('\\', "/")
    } else {
        expanded
    };

    if out.starts_with(FILE_SCHEME) && !out[FILE_SCHEME.len()..].starts_with('/') {
        out.insert(FILE_SCHEME.len(), '/');
    }
    out
}

fn expand(template: &str, variables: &Variables) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(len) = after.find('}') else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..len];
        match variables.get(name) {
            Some(value) => out.push_str(value),
            None => {
                log::trace!("unknown variable `{name}`");
                out.push_str(&rest[start..start + len + 3]);
            }
        }
        rest = &after[len + 1..];
    }

    out.push_str(rest);
    out
}

/// Contains `://`, or starts with a drive-letter root (`C:\`, `C:/`).
fn is_uri_shaped(text: &str) -> bool {
    if text.contains("://") {
        return true;
    }
    matches!(
        text.as_bytes(),
        [letter, b':', b'\\' | b'/', ..] if letter.is_ascii_alphabetic()
    )
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
