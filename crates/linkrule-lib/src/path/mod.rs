//! Path query compiler.
//!
//! Compiles a constrained JSONPath-like expression into a [`PathMatcher`]
//! over [`Breadcrumb`](linkrule_core::Breadcrumb)s:
//!
//! - `$` root anchor (optional)
//! - `.key`, `['key']`, `["key"]` children
//! - `..` recursive descent, matching zero or more intermediate levels
//! - `[0]` index, `[*]` any index, `*` any single key
//!
//! Filters, unions, slices and negative indices are rejected; a rejected
//! expression compiles to a matcher that never matches.

mod cache;
mod error;
mod lexer;
mod matcher;
mod parser;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

pub use cache::MatcherCache;
pub use error::{QueryError, QueryResult};
pub use matcher::PathMatcher;
pub use parser::{PathQuery, Segment, Selector};
