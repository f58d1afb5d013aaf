//! Linkrule: turn values in structured documents into links.
//!
//! Three independent pieces, plus an engine that drives them:
//! - [`path`]: path query compiler (`$.a..b[0]['x y']` → breadcrumb matcher)
//! - [`synth`]: capture, transform and template substitution
//! - [`resolve`](mod@resolve): `${name}` variables and URI separator normalization
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! use linkrule_core::{RawRuleSet, Variables};
//! use linkrule_lib::{LinkEngine, RuleSet};
//!
//! let raw = RawRuleSet::from_json(r#"[{
//!     "paths": "$..issue",
//!     "capture": "(\\w+)-(\\d+)",
//!     "link": "https://jira.example.com/$1/browse/$2"
//! }]"#).unwrap();
//! let (rules, errors) = RuleSet::compile(&raw);
//! assert!(errors.is_empty());
//!
//! let mut engine = LinkEngine::new(rules);
//! let doc = serde_json::json!({ "tasks": [{ "issue": "PROJ-123" }] });
//! let links = engine.document_links(Path::new("tasks.json"), &doc, &Variables::new());
//! assert_eq!(links[0].link.target, "https://jira.example.com/PROJ/browse/123");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod path;
pub mod resolve;
pub mod synth;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use engine::{LinkEngine, NodeLink, Rule, RuleError, RuleSet, TextLink};
pub use path::{MatcherCache, PathMatcher, QueryError};
pub use resolve::resolve;
pub use synth::{LinkResult, LinkSpec, PatternError, synthesize};
