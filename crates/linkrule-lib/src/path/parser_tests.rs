use super::{PathQuery, QueryError, Selector};

fn selectors(source: &str) -> Vec<(bool, Selector)> {
    PathQuery::parse(source)
        .unwrap()
        .segments()
        .iter()
        .map(|s| (s.descendant, s.selector.clone()))
        .collect()
}

fn key(k: &str) -> Selector {
    Selector::Key(k.to_string())
}

#[test]
fn dotted_children() {
    assert_eq!(
        selectors("$.store.book"),
        vec![(false, key("store")), (false, key("book"))]
    );
}

#[test]
fn root_only() {
    assert!(selectors("$").is_empty());
}

#[test]
fn root_anchor_is_optional() {
    assert_eq!(selectors("a.b"), selectors("$.a.b"));
    assert_eq!(selectors("..price"), selectors("$..price"));
}

#[test]
fn recursive_descent_marks_next_segment() {
    assert_eq!(
        selectors("$..book[*].author"),
        vec![
            (true, key("book")),
            (false, Selector::AnyIndex),
            (false, key("author")),
        ]
    );
    assert_eq!(
        selectors("$..[0]"),
        vec![(true, Selector::Index("0".to_string()))]
    );
    assert_eq!(selectors("$..*"), vec![(true, Selector::AnyKey)]);
}

#[test]
fn bracket_keys() {
    assert_eq!(
        selectors(r#"$.group["user[0]"].name"#),
        vec![(false, key("group")), (false, key("user[0]")), (false, key("name"))]
    );
    assert_eq!(selectors("$['a.b']"), vec![(false, key("a.b"))]);
    assert_eq!(selectors(r"$['it\'s']"), vec![(false, key("it's"))]);
}

#[test]
fn star_inside_name_is_glob() {
    assert_eq!(
        selectors("$.item*"),
        vec![(
            false,
            Selector::KeyGlob(vec!["item".to_string(), String::new()])
        )]
    );
    assert_eq!(selectors("$.*"), vec![(false, Selector::AnyKey)]);
}

#[test]
fn numeric_dotted_name_is_a_key() {
    assert_eq!(selectors("$.a.0"), vec![(false, key("a")), (false, key("0"))]);
}

#[test]
fn segment_spans_cover_source() {
    let query = PathQuery::parse("$.a['b']").unwrap();
    let spans: Vec<_> = query.segments().iter().map(|s| s.span.clone()).collect();
    assert_eq!(spans, vec![2..3, 3..8]);
    assert_eq!(query.source(), "$.a['b']");
}

#[test]
fn empty_query() {
    assert_eq!(PathQuery::parse(""), Err(QueryError::Empty));
    assert_eq!(PathQuery::parse("  "), Err(QueryError::Empty));
}

#[test]
fn trailing_dots() {
    assert_eq!(
        PathQuery::parse("$.a."),
        Err(QueryError::Expected {
            expected: "a key or `*` after `.`",
            span: 3..4,
        })
    );
    assert_eq!(
        PathQuery::parse("$..]"),
        Err(QueryError::Expected {
            expected: "a key, `*` or `[...]` after `..`",
            span: 1..3,
        })
    );
}

#[test]
fn trailing_recursive_descent_selects_rest() {
    assert_eq!(selectors("$.."), vec![(true, Selector::Rest)]);
    assert_eq!(
        selectors("$.a.."),
        vec![(false, key("a")), (true, Selector::Rest)]
    );
    assert_eq!(selectors(".."), selectors("$.."));
}

#[test]
fn stray_closing_bracket() {
    assert_eq!(
        PathQuery::parse("$.a]"),
        Err(QueryError::Unexpected {
            text: "]".to_string(),
            span: 3..4,
        })
    );
}

#[test]
fn unsupported_bracket_selectors() {
    for (source, text) in [
        ("$[?(@.a)]", "[?(@.a)]"),
        ("$[0:2]", "[0:2]"),
        ("$[-1]", "[-1]"),
        ("$['a','b']", "['a','b']"),
    ] {
        let err = PathQuery::parse(source).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnsupportedSelector {
                text: text.to_string(),
                span: 1..source.len(),
            },
            "{source}"
        );
    }
}

#[test]
fn incomplete_brackets() {
    assert_eq!(
        PathQuery::parse("$["),
        Err(QueryError::Expected {
            expected: "a key, index or `*` after `[`",
            span: 1..2,
        })
    );
    assert_eq!(
        PathQuery::parse("$[]"),
        Err(QueryError::Expected {
            expected: "a key, index or `*` inside `[]`",
            span: 1..3,
        })
    );
    assert_eq!(
        PathQuery::parse("$[0"),
        Err(QueryError::Expected {
            expected: "closing `]`",
            span: 1..3,
        })
    );
    assert!(matches!(
        PathQuery::parse("$['abc"),
        Err(QueryError::Unterminated { .. })
    ));
}

#[test]
fn error_span_accessor() {
    assert_eq!(QueryError::Empty.span(), 0..0);
    assert_eq!(PathQuery::parse("$.a]").unwrap_err().span(), 3..4);
}
