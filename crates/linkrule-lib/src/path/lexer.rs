//! Lexer for path queries.
//!
//! Produces span-based tokens; text is sliced from the expression only when needed.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters (in practice: an unterminated quote and
//! whatever follows it) are coalesced into a single `Garbage` token.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("$", priority = 5)]
    Root,

    /// `..`, defined alongside `.` so the longer form always wins.
    #[token("..")]
    DotDot,

    #[token(".")]
    Dot,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("*")]
    Star,

    #[regex(r"[0-9]+", priority = 3)]
    Int,

    #[regex(r#""(?:[^"\\]|\\.|"")*""#)]
    #[regex(r"'(?:[^'\\]|\\.|'')*'")]
    Quoted,

    /// Bare key text: anything that is not structural punctuation.
    #[regex(r#"[^.\[\]*'"]+"#)]
    Name,

    /// Coalesced unrecognized characters
    Garbage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a path query into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..lexer.span().start));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[token.span.clone()]
}

/// Recovers the literal key from a `Quoted` token's text, quotes included.
///
/// `\'`, `\"` and `\\` are escapes, as is a doubled quote of the enclosing kind.
/// Any other backslash is kept verbatim.
pub fn unquote(text: &str) -> String {
    let Some(quote) = text.chars().next() else {
        return String::new();
    };
    let body = &text[quote.len_utf8()..text.len() - quote.len_utf8()];

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('\'' | '"' | '\\')) => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push('\\'),
            },
            c if c == quote && chars.peek() == Some(&quote) => {
                out.push(quote);
                chars.next();
            }
            c => out.push(c),
        }
    }
    out
}
