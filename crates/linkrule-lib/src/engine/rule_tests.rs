use std::path::Path;

use indoc::indoc;
use linkrule_core::{RawRuleSet, Variables};

use super::{RuleError, RuleSet};
use crate::diagnostics::Severity;
use crate::synth::LinkResult;

fn compile(json: &str) -> (RuleSet, Vec<RuleError>) {
    RuleSet::compile(&RawRuleSet::from_json(json).unwrap())
}

#[test]
fn bad_rules_are_dropped_and_reported() {
    let (rules, errors) = compile(indoc! {r#"
        [
            { "paths": "$.a", "link": "ok" },
            { "files": "[", "paths": "$.a", "link": "bad glob" },
            { "paths": "$.a", "capture": "(", "link": "bad capture" },
            { "patterns": ["x", "[z"], "link": "bad text pattern" },
            { "paths": "$.a", "link": "x", "transforms": [{ "command": "reverse" }] },
            { "paths": "$.a", "valuePattern": "*", "link": "bad value pattern" }
        ]
    "#});

    assert_eq!(rules.len(), 1);
    assert_eq!(rules.iter().next().unwrap().index(), 0);
    assert_eq!(
        errors.iter().map(RuleError::rule).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert!(errors.iter().all(RuleError::is_fatal));
}

#[test]
fn invalid_path_query_keeps_rule() {
    let (rules, errors) = compile(indoc! {r#"
        { "rules": [{ "paths": ["$.a", "$.b[?(@.x)]"], "link": "x" }] }
    "#});

    assert_eq!(rules.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].is_fatal());
    assert!(matches!(
        &errors[0],
        RuleError::Query { rule: 0, index: 1, expression, .. } if expression == "$.b[?(@.x)]"
    ));
}

#[test]
fn diagnostics_point_at_rule_fields() {
    let (_, errors) = compile(indoc! {r#"
        [
            { "paths": ["$.a", "$[-1]"], "link": "x" },
            { "paths": "$.a", "capture": "(", "link": "x" },
            { "files": "[", "link": "x" },
            { "patterns": "a", "link": "x", "transforms": [{ "command": "reverse" }] }
        ]
    "#});
    let diagnostics: Vec<_> = errors.iter().map(RuleError::to_diagnostic).collect();

    assert_eq!(diagnostics[0].severity(), Severity::Warning);
    assert_eq!(diagnostics[0].origin(), Some("rules[0].paths[1]"));
    assert_eq!(diagnostics[1].severity(), Severity::Error);
    assert_eq!(diagnostics[1].origin(), Some("rules[1].capture"));
    assert_eq!(diagnostics[1].message(), "unclosed group");
    assert_eq!(diagnostics[2].origin(), Some("rules[2].files"));
    assert_eq!(diagnostics[3].origin(), Some("rules[3].transforms"));
    assert_eq!(
        diagnostics[3].message(),
        "unknown transform command `reverse`"
    );
}

#[test]
fn compile_with_diagnostics() {
    let raw = RawRuleSet::from_json(r#"[{ "paths": "$.", "link": "x" }]"#).unwrap();
    let (rules, diagnostics) = RuleSet::compile_with_diagnostics(&raw);

    assert_eq!(rules.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
}

#[test]
fn file_glob() {
    let (rules, _) = compile(r#"[{ "files": "**/package.json", "paths": "$.a", "link": "x" }]"#);
    let rule = rules.iter().next().unwrap();

    assert!(rule.applies_to(Path::new("package.json")));
    assert!(rule.applies_to(Path::new("web/app/package.json")));
    assert!(!rule.applies_to(Path::new("web/package.json.bak")));
    assert!(!rule.applies_to(Path::new("tsconfig.json")));
}

#[test]
fn no_glob_applies_everywhere() {
    let (rules, _) = compile(r#"[{ "paths": "$.a", "link": "x" }]"#);
    assert!(rules.iter().next().unwrap().applies_to(Path::new("any/where.txt")));
}

#[test]
fn value_pattern_gates_link() {
    let (rules, _) = compile(r#"[{ "paths": "$.a", "valuePattern": "^https?://", "link": "$0" }]"#);
    let rule = rules.iter().next().unwrap();
    let vars = Variables::new();

    assert!(rule.link("relative/path", &vars).is_none());
    assert_eq!(
        rule.link("https://x.dev", &vars),
        Some(LinkResult {
            target: "https://x.dev".to_string(),
            tooltip: "https://x.dev".to_string(),
        })
    );
}

#[test]
fn link_resolves_variables() {
    let (rules, _) = compile(indoc! {r#"
        [{
            "paths": "$.a",
            "link": "file://${workspaceFolder}/$0",
            "tooltip": "Open $0 in ${workspaceFolderBasename}"
        }]
    "#});
    let vars: Variables = [("workspaceFolder", r"C:\ws\proj"), ("workspaceFolderBasename", "proj")]
        .into_iter()
        .collect();

    assert_eq!(
        rules.iter().next().unwrap().link("docs/a.md", &vars),
        Some(LinkResult {
            target: "file:///C:/ws/proj/docs/a.md".to_string(),
            tooltip: "Open docs/a.md in proj".to_string(),
        })
    );
}
