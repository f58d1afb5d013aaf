use super::lexer::{TokenKind::*, lex, token_text, unquote};

fn kinds(source: &str) -> Vec<super::lexer::TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn lex_all_structural_tokens() {
    assert_eq!(
        kinds("$.a..b[0]['x']*"),
        vec![
            Root,
            Dot,
            Name,
            DotDot,
            Name,
            BracketOpen,
            Int,
            BracketClose,
            BracketOpen,
            Quoted,
            BracketClose,
            Star,
        ]
    );
}

#[test]
fn lex_dollar_inside_name_is_text() {
    let source = "$..$ref";
    let tokens = lex(source);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, Root);
    assert_eq!(tokens[2].kind, Name);
    assert_eq!(token_text(source, &tokens[2]), "$ref");
}

#[test]
fn lex_digits_prefer_int_but_longer_names_win() {
    assert_eq!(kinds("[12]"), vec![BracketOpen, Int, BracketClose]);
    assert_eq!(kinds(".12ab"), vec![Dot, Name]);
}

#[test]
fn lex_quoted_key_keeps_brackets_and_dots() {
    let source = r#"["user[0].name"]"#;
    let tokens = lex(source);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, Quoted);
    assert_eq!(token_text(source, &tokens[1]), r#""user[0].name""#);
}

#[test]
fn lex_doubled_quote_stays_in_one_token() {
    let source = "['it''s']";
    assert_eq!(kinds(source), vec![BracketOpen, Quoted, BracketClose]);
}

#[test]
fn lex_unterminated_quote_is_garbage() {
    let kinds = kinds("['abc");
    assert_eq!(kinds[0], BracketOpen);
    assert!(kinds.contains(&Garbage));
}

#[test]
fn lex_empty_input() {
    assert!(lex("").is_empty());
}

#[test]
fn lex_dollar_after_dot_stays_in_name() {
    let source = "$.a$b";
    let tokens = lex(source);
    assert_eq!(kinds(source), vec![Root, Dot, Name]);
    assert_eq!(token_text(source, &tokens[2]), "a$b");
}

#[test]
fn unquote_escapes() {
    assert_eq!(unquote(r"'it\'s'"), "it's");
    assert_eq!(unquote("'it''s'"), "it's");
    assert_eq!(unquote(r#""say \"hi\"""#), r#"say "hi""#);
    assert_eq!(unquote(r"'a\\b'"), r"a\b");
}

#[test]
fn unquote_keeps_unknown_escapes_and_foreign_quotes() {
    assert_eq!(unquote(r"'a\b'"), r"a\b");
    assert_eq!(unquote(r#""it''s""#), "it''s");
    assert_eq!(unquote("''"), "");
}

#[test]
fn unquote_unicode() {
    assert_eq!(unquote("'😀 key.x'"), "😀 key.x");
}
