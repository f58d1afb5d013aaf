//! Breadcrumb matching for parsed path queries.

use linkrule_core::Breadcrumb;

use super::error::QueryError;
use super::parser::{PathQuery, Segment, Selector};

/// Immutable predicate over breadcrumbs, compiled from one path query.
///
/// A matcher built from a malformed expression keeps the error and rejects
/// every breadcrumb.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    compiled: Result<PathQuery, QueryError>,
}

impl PathMatcher {
    /// Compile an expression. Never fails: malformed input yields a matcher
    /// that never matches (see [`PathMatcher::error`]).
    pub fn compile(expression: &str) -> Self {
        let compiled = PathQuery::parse(expression);
        if let Err(err) = &compiled {
            log::warn!("path query `{expression}` never matches: {err}");
        }
        Self { compiled }
    }

    pub fn from_query(query: PathQuery) -> Self {
        Self {
            compiled: Ok(query),
        }
    }

    /// Whether the whole breadcrumb, root to node, is selected by the query.
    pub fn matches(&self, breadcrumb: &Breadcrumb) -> bool {
        match &self.compiled {
            Ok(query) => match_segments(query.segments(), breadcrumb.tokens()),
            Err(_) => false,
        }
    }

    pub fn query(&self) -> Option<&PathQuery> {
        self.compiled.as_ref().ok()
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.compiled.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }
}

fn match_segments(segments: &[Segment], tokens: &[String]) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return tokens.is_empty();
    };

    if segment.selector == Selector::Rest {
        return true;
    }

    if segment.descendant {
        return (0..tokens.len()).any(|skip| {
            segment.selector.accepts(&tokens[skip]) && match_segments(rest, &tokens[skip + 1..])
        });
    }

    match tokens.split_first() {
        Some((token, remaining)) => {
            segment.selector.accepts(token) && match_segments(rest, remaining)
        }
        None => false,
    }
}

impl Selector {
    /// Whether this selector accepts a single breadcrumb token.
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            Selector::Key(key) => key == token,
            Selector::KeyGlob(pieces) => glob_matches(pieces, token),
            Selector::AnyKey => !token.is_empty(),
            Selector::Index(index) => index == token,
            Selector::AnyIndex => !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()),
            Selector::Rest => true,
        }
    }
}

/// `pieces` are the literals around each `*`; every star consumes at least one char.
fn glob_matches(pieces: &[String], token: &str) -> bool {
    let Some((first, rest)) = pieces.split_first() else {
        return token.is_empty();
    };
    token
        .strip_prefix(first.as_str())
        .is_some_and(|remaining| match_after_star(rest, remaining))
}

fn match_after_star(pieces: &[String], text: &str) -> bool {
    let Some((piece, rest)) = pieces.split_first() else {
        return text.is_empty();
    };

    let boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .filter(|&i| i > 0);

    for split in boundaries {
        if let Some(remaining) = text[split..].strip_prefix(piece.as_str())
            && match_after_star(rest, remaining)
        {
            return true;
        }
    }
    false
}
